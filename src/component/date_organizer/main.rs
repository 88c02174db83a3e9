use super::classifier::FileClassifier;
use super::file_mover::{FileMover, MoveResult};
use crate::tools::{
    ExifDateFileSelector, FileSelector, ensure_directory_exists, validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use log::{info, warn};
use rust_i18n::t;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 依日期整理檔案元件
///
/// 走訪根目錄、依日期鍵分組，確認後把檔案搬進
/// `<輸出目錄>/<日期鍵>/` 底下。
pub struct DateOrganizer {
    root_dir: PathBuf,
    out_dir: PathBuf,
    strategy: String,
    assume_yes: bool,
    dry_run: bool,
    shutdown_signal: Arc<AtomicBool>,
}

impl DateOrganizer {
    /// 建立整理元件；未指定輸出目錄時以根目錄為輸出目錄
    #[must_use]
    pub fn new(
        root_dir: PathBuf,
        out_dir: Option<PathBuf>,
        strategy: impl Into<String>,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        let out_dir = out_dir.unwrap_or_else(|| root_dir.clone());
        Self {
            root_dir,
            out_dir,
            strategy: strategy.into(),
            assume_yes: false,
            dry_run: false,
            shutdown_signal,
        }
    }

    /// 跳過搬移前的互動確認
    #[must_use]
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// 只列出分類結果，不搬移任何檔案
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("date_organize.title")).cyan().bold());

        validate_directory_exists(&self.root_dir)?;
        if !self.dry_run {
            ensure_directory_exists(&self.out_dir)?;
        }

        let selector = ExifDateFileSelector::new(&self.strategy);
        let mut classifier = FileClassifier::new(selector);

        println!("{}", style(t!("date_organize.scanning")).dim());
        classifier.classify(&self.root_dir);

        if classifier.is_empty() {
            println!("{}", style(t!("date_organize.no_files")).yellow());
            return Ok(());
        }

        self.print_bucket_summary(&classifier);

        if self.dry_run {
            println!("{}", style(t!("date_organize.dry_run")).yellow());
            for (key, path) in classifier.iter() {
                println!("{} {}", style(key).cyan(), path.display());
            }
            return Ok(());
        }

        if !self.assume_yes && !self.confirm_move()? {
            println!("{}", style(t!("date_organize.cancelled")).yellow());
            return Ok(());
        }

        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止處理");
            return Ok(());
        }

        println!("{}", style(t!("date_organize.moving")).cyan());
        let mover = FileMover::new(self.out_dir.clone(), Arc::clone(&self.shutdown_signal));
        let result = mover.move_classified(classifier.iter())?;

        self.print_result(&result);

        Ok(())
    }

    fn confirm_move(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("date_organize.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_bucket_summary<S: FileSelector>(&self, classifier: &FileClassifier<S>) {
        println!();
        println!(
            "{}",
            style(t!(
                "date_organize.summary",
                count = classifier.file_count(),
                buckets = classifier.bucket_count()
            ))
            .green()
        );
        println!();

        for (key, paths) in classifier.grouping() {
            println!(
                "  {} {} - {}",
                style("→").dim(),
                style(key).cyan(),
                t!("date_organize.bucket_files", count = paths.len())
            );
        }

        println!();
    }

    fn print_result(&self, result: &MoveResult) {
        println!();
        println!("{}", style(t!("date_organize.result_title")).cyan().bold());
        println!(
            "  {}",
            style(t!("date_organize.result_moved", count = result.files_moved)).green()
        );

        if result.errors > 0 {
            println!(
                "  {}",
                style(t!("date_organize.result_errors", count = result.errors)).red()
            );
        }

        info!(
            "日期整理完成 - 搬移: {}, 失敗: {}",
            result.files_moved, result.errors
        );
    }
}
