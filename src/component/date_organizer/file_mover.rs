//! 檔案搬移器
//!
//! 依分類結果把檔案搬到 `<輸出目錄>/<日期鍵>/<檔名>`

use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use console::style;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 搬移結果
#[derive(Debug, Default)]
pub struct MoveResult {
    /// 成功搬移的檔案數
    pub files_moved: usize,
    /// 搬移失敗的檔案數
    pub errors: usize,
}

/// 檔案搬移器
///
/// 逐檔搬移，不具交易性；目標位置已有同名檔案時直接覆蓋，
/// 與 rename 的預設行為一致。
pub struct FileMover {
    out_dir: PathBuf,
    shutdown_signal: Arc<AtomicBool>,
}

impl FileMover {
    #[must_use]
    pub const fn new(out_dir: PathBuf, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            out_dir,
            shutdown_signal,
        }
    }

    /// 搬移所有 (日期鍵, 檔案路徑) 配對
    ///
    /// 每搬一個檔案就輸出一行「日期鍵 來源路徑」。
    /// 建立日期桶資料夾失敗視為致命錯誤，單一檔案搬移失敗只計數。
    pub fn move_classified<'a, I>(&self, pairs: I) -> Result<MoveResult>
    where
        I: IntoIterator<Item = (&'a str, &'a Path)>,
    {
        let mut result = MoveResult::default();

        for (key, source) in pairs {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，停止搬移");
                break;
            }

            let bucket_dir = self.out_dir.join(key);
            ensure_directory_exists(&bucket_dir)?;

            let Some(file_name) = source.file_name() else {
                warn!("略過沒有檔名的路徑: {}", source.display());
                continue;
            };
            let target = bucket_dir.join(file_name);

            println!("{} {}", style(key).cyan(), source.display());

            match fs::rename(source, &target) {
                Ok(()) => {
                    debug!("搬移檔案: {} -> {}", source.display(), target.display());
                    result.files_moved += 1;
                }
                Err(e) => {
                    // rename 失敗（可能跨檔案系統）時，改用複製後刪除
                    if let Err(copy_err) = copy_and_delete(source, &target) {
                        warn!(
                            "搬移檔案失敗 {}: {copy_err} (原始錯誤: {e})",
                            source.display()
                        );
                        result.errors += 1;
                    } else {
                        result.files_moved += 1;
                    }
                }
            }
        }

        Ok(result)
    }
}

/// 複製檔案後刪除原檔案
fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target)
        .with_context(|| format!("複製檔案失敗: {} -> {}", source.display(), target.display()))?;

    fs::remove_file(source).with_context(|| format!("刪除原檔案失敗: {}", source.display()))?;

    Ok(())
}
