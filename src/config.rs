use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub base_url: String,
    pub download_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Default settings (the server's stock bind address)
            .set_default("base_url", "http://127.0.0.1:5000")?
            .set_default("download_dir", "./downloads")?
            .set_default("log_level", "info")?
            // Config file (optional)
            .add_source(File::with_name("config").required(false))
            // Environment variables (e.g. FORMWIRE_BASE_URL=http://host:8080)
            .add_source(Environment::with_prefix("FORMWIRE"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.download_dir, PathBuf::from("./downloads"));
        assert_eq!(settings.log_level, "info");
    }
}
