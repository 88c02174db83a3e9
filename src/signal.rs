use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 建立 Ctrl-C 中斷旗標
///
/// 旗標只在搬移階段於檔案之間被檢查；分類走訪一旦開始便執行到底。
#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n收到中斷訊號，將在目前檔案處理完後停止...");
    })
    .expect("無法設定 Ctrl-C 處理器");

    shutdown_signal
}
