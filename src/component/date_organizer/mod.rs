//! 依日期整理檔案元件
//!
//! 遞迴走訪根目錄，依修改時間或 EXIF 拍攝時間產生日期鍵，
//! 將檔案搬進對應的日期資料夾

mod classifier;
mod file_mover;
mod main;

pub use classifier::FileClassifier;
pub use file_mover::{FileMover, MoveResult};
pub use main::DateOrganizer;
