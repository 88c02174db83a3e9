use serde::{Deserialize, Serialize};

/// 最多保留的歷史路徑數量
pub const MAX_RECENT_PATHS: usize = 5;

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "en-US")]
    #[default]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

/// 使用者設定，存放於執行目錄的 settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 介面語言
    pub language: Language,
    /// 未以 --strategy 指定時採用的分類粒度
    pub default_strategy: String,
    /// 最近整理過的根目錄
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_strategy: "day".to_string(),
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.language, Language::EnUs);
        assert_eq!(settings.default_strategy, "day");
        assert!(settings.recent_paths.is_empty());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = UserSettings {
            language: Language::ZhTw,
            default_strategy: "month".to_string(),
            recent_paths: vec!["/data/photos".to_string()],
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: UserSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.language, Language::ZhTw);
        assert_eq!(parsed.default_strategy, "month");
        assert_eq!(parsed.recent_paths, settings.recent_paths);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: UserSettings = serde_json::from_str(r#"{"language":"zh-TW"}"#).unwrap();
        assert_eq!(parsed.language, Language::ZhTw);
        assert_eq!(parsed.default_strategy, "day");
    }
}
