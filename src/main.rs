use std::error::Error;
use std::sync::OnceLock;

use http::server::ServerInstance;
use models::settings::Settings;

mod deck;
mod http;
mod models;
mod utils;

pub static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    let (host, port) = (settings.host.clone(), settings.port);
    SETTINGS.set(settings).expect("Settings already initialized");

    let server = ServerInstance::create_instance(&host, port).await?;
    server.run().await?;
    Ok(())
}
