use anyhow::Result;
use auto_date_organize::cli::Cli;
use auto_date_organize::component::DateOrganizer;
use auto_date_organize::config::Config;
use auto_date_organize::config::save::{add_recent_path, save_settings};
use auto_date_organize::init;
use auto_date_organize::signal::setup_shutdown_signal;
use clap::Parser;
use console::style;
use log::{info, warn};

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();
    let shutdown_signal = setup_shutdown_signal();

    let config = Config::new();
    rust_i18n::set_locale(config.settings.language.as_str());

    let strategy = cli
        .strategy
        .clone()
        .unwrap_or_else(|| config.settings.default_strategy.clone());

    let organizer = DateOrganizer::new(
        cli.root_dir.clone(),
        cli.outdir.clone(),
        strategy,
        shutdown_signal,
    )
    .with_assume_yes(cli.yes)
    .with_dry_run(cli.dry_run);

    if let Err(e) = organizer.run() {
        warn!("Program error: {e}");
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
        std::process::exit(1);
    }

    if !cli.dry_run {
        let mut settings = config.settings.clone();
        add_recent_path(&mut settings, &cli.root_dir.to_string_lossy());
        if let Err(e) = save_settings(&settings) {
            warn!("無法儲存路徑歷史: {e}");
        }
    }

    info!("Program exited normally");
    Ok(())
}
