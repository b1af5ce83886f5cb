use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub listen_port: String,
    pub database_url: String,
    pub database_name: String,
    pub jobs_collection: String,
    pub profiles_collection: String,
    pub body_limit_mb: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_port", "5000")?
            .set_default("database_url", "mongodb://localhost:27017")?
            .set_default("database_name", "jobfinder")?
            .set_default("jobs_collection", "python")?
            .set_default("profiles_collection", "users")?
            .set_default("body_limit_mb", 10)?
            .add_source(Environment::default())
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        Ok(s)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
