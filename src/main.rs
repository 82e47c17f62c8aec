use seed_loader::config::LoaderConfig;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = LoaderConfig::load()?;

    let Some(manifest_path) = std::env::args().nth(1) else {
        println!("usage: seed-loader <input file path>");
        return Ok(());
    };

    let host = config.host_url()?;
    seed_loader::run(&host, Path::new(&manifest_path)).await?;

    Ok(())
}
