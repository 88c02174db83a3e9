use clap::Parser;
use std::path::PathBuf;

/// 依檔案日期重新整理資料夾
///
/// `--strategy` 在命令列層就被驗證，只接受 year、month、day；
/// 函式庫層的粒度解析另有「拼錯時沿用預設」的寬鬆行為，
/// 僅供程式呼叫端使用。
#[derive(Parser, Debug)]
#[command(name = "auto_date_organize", about = "依檔案日期將檔案整理進日期資料夾")]
pub struct Cli {
    /// 要整理的根目錄
    #[arg(long)]
    pub root_dir: PathBuf,

    /// 輸出目錄，未指定時與根目錄相同
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// 分類粒度，未指定時採用設定檔的預設值
    #[arg(long, value_parser = ["year", "month", "day"])]
    pub strategy: Option<String>,

    /// 跳過搬移前的確認
    #[arg(long)]
    pub yes: bool,

    /// 只顯示分類結果，不搬移檔案
    #[arg(long)]
    pub dry_run: bool,
}
