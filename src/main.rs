use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use tome::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    log::info!("Starting server on {}", address);

    run(listener, configuration)?.await?;

    Ok(())
}
