use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub deck_site: String,
}

impl Settings {
    /// Layered load: built-in defaults, then an optional `settings` file,
    /// then environment variables.
    pub fn load() -> Result<Settings, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("deck_site", "https://swudb.com")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
