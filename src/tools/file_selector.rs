use crate::tools::date_key::ModifiedDateKey;
use anyhow::{Context, Result};
use log::warn;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// 檔案選擇器介面
///
/// 抽象「某個資料夾底下有哪些檔案與子資料夾」，讓走訪邏輯不直接依賴
/// 檔案系統，測試時可以用假資料取代。`files` 與 `subdirectories`
/// 只列出第一層，不做遞迴。
pub trait FileSelector {
    /// 列出資料夾第一層的一般檔案名稱
    fn files(&self, dir: &Path) -> Result<Vec<OsString>>;

    /// 列出資料夾第一層的子資料夾名稱
    fn subdirectories(&self, dir: &Path) -> Result<Vec<OsString>>;

    /// 為單一檔案產生分類鍵
    fn generate_key(&self, file_path: &Path) -> Result<String>;
}

#[derive(Clone, Copy)]
enum EntryKind {
    File,
    Directory,
}

/// 列出第一層符合類型的項目名稱，排序後回傳
///
/// 個別項目讀取失敗時略過並記錄，整個資料夾讀不到才回報錯誤。
fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<OsString>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("無法讀取資料夾: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("讀取資料夾項目失敗 ({}): {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        let matched = match kind {
            EntryKind::File => path.is_file(),
            EntryKind::Directory => path.is_dir(),
        };
        if matched {
            names.push(entry.file_name());
        }
    }

    names.sort();
    Ok(names)
}

/// 以修改時間分類的檔案選擇器
pub struct DateFileSelector {
    key_strategy: ModifiedDateKey,
}

impl DateFileSelector {
    #[must_use]
    pub fn new(strategy: &str) -> Self {
        Self {
            key_strategy: ModifiedDateKey::new(strategy),
        }
    }

    #[must_use]
    pub const fn key_strategy(&self) -> ModifiedDateKey {
        self.key_strategy
    }
}

impl FileSelector for DateFileSelector {
    fn files(&self, dir: &Path) -> Result<Vec<OsString>> {
        list_entries(dir, EntryKind::File)
    }

    fn subdirectories(&self, dir: &Path) -> Result<Vec<OsString>> {
        list_entries(dir, EntryKind::Directory)
    }

    fn generate_key(&self, file_path: &Path) -> Result<String> {
        self.key_strategy.key_for(file_path)
    }
}
