use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// 日期鍵的分類粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Year,
    Month,
    #[default]
    Day,
}

impl Granularity {
    /// 解析粒度字串（不分大小寫）
    ///
    /// 無法辨識的字串會沿用預設的 `Day`，不會回報錯誤。
    /// 這是既有行為，函式庫呼叫端需自行留意拼字。
    #[must_use]
    pub fn parse(strategy: &str) -> Self {
        match strategy.to_lowercase().as_str() {
            "year" => Self::Year,
            "month" => Self::Month,
            _ => Self::Day,
        }
    }

    /// 對應的 strftime 格式字串
    #[must_use]
    pub const fn format_str(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::Month => "%Y-%m",
            Self::Day => "%Y-%m-%d",
        }
    }
}

/// 修改時間日期鍵策略
///
/// 讀取檔案的最後修改時間，以本地時區依粒度格式化成分類鍵。
#[derive(Debug, Clone, Copy)]
pub struct ModifiedDateKey {
    granularity: Granularity,
}

impl ModifiedDateKey {
    #[must_use]
    pub fn new(strategy: &str) -> Self {
        Self {
            granularity: Granularity::parse(strategy),
        }
    }

    #[must_use]
    pub const fn granularity(self) -> Granularity {
        self.granularity
    }

    /// 以檔案的最後修改時間產生日期鍵
    pub fn key_for(self, file_path: &Path) -> Result<String> {
        let metadata = fs::metadata(file_path)
            .with_context(|| format!("無法讀取檔案資訊: {}", file_path.display()))?;
        let modified = metadata
            .modified()
            .with_context(|| format!("無法取得修改時間: {}", file_path.display()))?;
        Ok(self.format_system_time(modified))
    }

    #[must_use]
    pub fn format_system_time(self, time: SystemTime) -> String {
        let datetime: DateTime<Local> = time.into();
        datetime.format(self.granularity.format_str()).to_string()
    }

    #[must_use]
    pub fn format_naive(self, datetime: NaiveDateTime) -> String {
        datetime.format(self.granularity.format_str()).to_string()
    }
}
