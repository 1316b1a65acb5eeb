use anyhow::Result;
use clap::Parser;

use project_scout::cli::Cli;
use project_scout::config::Config;
use project_scout::scanner::FileWalker;
use project_scout::tui::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 日志写到 stderr，避免和表格界面混在一起
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // 加载配置
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_file(config_path)?
    } else {
        Config::load_or_default()?
    };

    let root = cli.resolve_root()?;
    println!("Scanning {}...", root.display());

    let projects = FileWalker::new(&config).scan(&root).await;
    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let mut app = App::new(projects, &config.display);
    app.run().await
}
