use anyhow::{Context, Result, bail};
use std::path::Path;

/// 驗證路徑存在且為資料夾，否則回報錯誤
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("找不到資料夾: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 確保資料夾存在，必要時逐層建立
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}
