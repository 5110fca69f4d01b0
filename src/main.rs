use clap::Parser;

use injection_demo::{api, config::Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_logging();

    api::server::start_server(config).await
}
