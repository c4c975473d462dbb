use rawhttp::config::Config;
use rawhttp::{app, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    server::listener::run(&cfg, app::routes()).await
}
