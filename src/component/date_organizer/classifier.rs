//! 日期分類器
//!
//! 遞迴走訪根目錄，透過 `FileSelector` 為每個檔案產生日期鍵，
//! 累積成「日期鍵 → 檔案路徑列表」的分組結果

use crate::tools::FileSelector;
use log::warn;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 檔案日期分類器
///
/// 分組結果由單一實例持有，每次 `classify` 會先清空再重建，
/// 不會跨呼叫累積。桶內路徑維持走訪時的發現順序。
pub struct FileClassifier<S: FileSelector> {
    selector: S,
    grouping: BTreeMap<String, Vec<PathBuf>>,
}

impl<S: FileSelector> FileClassifier<S> {
    #[must_use]
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            grouping: BTreeMap::new(),
        }
    }

    /// 重新分類整棵目錄樹
    ///
    /// 根目錄不存在或不是資料夾時，結果為空分組，不視為錯誤。
    /// 走訪途中讀不到的子樹會記錄警告後略過。
    pub fn classify(&mut self, root_dir: &Path) {
        self.grouping.clear();

        if !root_dir.is_dir() {
            return;
        }

        let root = std::path::absolute(root_dir).unwrap_or_else(|_| root_dir.to_path_buf());
        self.walk(&root);
    }

    fn walk(&mut self, current_dir: &Path) {
        let files = match self.selector.files(current_dir) {
            Ok(files) => files,
            Err(e) => {
                warn!("略過無法列出的資料夾 {}: {e}", current_dir.display());
                return;
            }
        };

        for name in files {
            let file_path = current_dir.join(&name);
            match self.selector.generate_key(&file_path) {
                Ok(key) => {
                    self.grouping.entry(key).or_default().push(file_path);
                }
                Err(e) => {
                    warn!("略過無法產生日期鍵的檔案 {}: {e}", file_path.display());
                }
            }
        }

        let subdirs = match self.selector.subdirectories(current_dir) {
            Ok(dirs) => dirs,
            Err(e) => {
                warn!("略過無法列出的資料夾 {}: {e}", current_dir.display());
                return;
            }
        };

        for name in subdirs {
            self.walk(&current_dir.join(name));
        }
    }

    /// 依序走過所有 (日期鍵, 檔案路徑) 配對
    ///
    /// 桶依鍵排序，桶內依發現順序。迭代器可重複建立，
    /// 每次都反映最近一次 `classify` 的結果。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.grouping
            .iter()
            .flat_map(|(key, paths)| paths.iter().map(move |path| (key.as_str(), path.as_path())))
    }

    /// 目前的分組結果
    #[must_use]
    pub const fn grouping(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.grouping
    }

    /// 日期桶數量
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.grouping.len()
    }

    /// 所有桶內的檔案總數
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.grouping.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grouping.is_empty()
    }
}
