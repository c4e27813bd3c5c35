use anyhow::Result;
use bench_dispatch::cli::{Cli, Commands};
use bench_dispatch::utils::logging;
use bench_dispatch::{App, Config};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先于环境变量
    let mut config = Config::from_env();
    if let Some(vault) = cli.vault {
        config.vault_root = vault;
    }
    if cli.settings.is_some() {
        config.settings_file = cli.settings;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let app = App::initialize(&config)?;

    match cli.command {
        Commands::RunAll => {
            let report = app.run_all().await?;
            println!("{}", report);
        }
        Commands::RunCurrent { document } => {
            let report = app.run_current(&document).await?;
            println!("{}", report);
        }
        Commands::Run { collection } => {
            let report = app.run_collection(&collection).await?;
            println!("{}", report);
        }
        Commands::List => {
            for (id, enabled) in app.list_collections()? {
                let marker = if enabled { "✓" } else { " " };
                println!("[{}] {}", marker, id);
            }
        }
        Commands::Enable { collection } => {
            if app.enable_collection(&collection)? {
                info!("✓ 已启用集合: {}", collection);
            } else {
                info!("集合已处于启用状态: {}", collection);
            }
        }
        Commands::Disable { collection } => {
            if app.disable_collection(&collection)? {
                info!("✓ 已停用集合: {}", collection);
            } else {
                info!("集合未启用: {}", collection);
            }
        }
        Commands::Set { key, value } => {
            app.set_setting(&key, &value)?;
            info!("✓ 已保存 {} = {}", key, value);
        }
        Commands::ShowSettings => {
            println!("{}", serde_json::to_string_pretty(&app.settings()?)?);
        }
    }

    Ok(())
}
