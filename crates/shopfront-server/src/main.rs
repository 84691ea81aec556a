use clap::Parser;
use shopfront_server::{logging, server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config.log_settings());
    server::run(config).await
}
