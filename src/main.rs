use anyhow::Context;
use clap::Parser;

use dynamic_app::cli::Cli;
use dynamic_app::demo::build_application;
use dynamic_app::logging::init_tracing;
use dynamic_app::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = cli.load_config().context("failed to load configuration")?;
    let addr = config.bind_addr()?;

    let (app, _stores) = build_application(&config);
    let mut server = Server::new(app);
    server.bind(addr).await?;
    server.run().await?;

    Ok(())
}
