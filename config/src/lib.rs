use std::fs::File;

use serde::Deserialize;

pub use crate::{
    api::{ApiConfig, ApiRestConfig},
    hash::{Argon2HashConfig, HashConfig},
    log::LogConfig,
    store::{JsonStoreConfig, StoreConfig},
    token::{JwtTokenConfig, TokenConfig},
};

mod api;
mod hash;
mod log;
mod store;
mod token;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    store: StoreConfig,
    api: ApiConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn new(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
log:
  display_level: true
  level_filter: "info"
hash:
  argon2:
    algorithm: "Argon2id"
    version: "V0x13"
    salt: "cmVwbGFjZXRoaXNzYWx0"
token:
  jwt:
    secret: "replacethissecret"
    expiry_duration: 3600
store:
  json:
    path: "./db.json"
api:
  rest:
    host: "0.0.0.0"
    port: "8080"
    allowed_origin: "http://localhost:5173"
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = super::new(file.path().to_str().unwrap());

        assert_eq!(config.log().level_filter(), "info");
        assert_eq!(config.hash().argon2().algorithm(), "Argon2id");
        assert_eq!(config.token().jwt().secret(), "replacethissecret");
        assert_eq!(*config.token().jwt().expiry_duration(), 3600);
        assert_eq!(config.store().json().path(), "./db.json");
        assert_eq!(config.api().rest().host(), "0.0.0.0");
        assert_eq!(config.api().rest().port(), "8080");
        assert_eq!(
            config.api().rest().allowed_origin().as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn allowed_origin_is_optional() {
        let yaml = r#"
log:
  display_level: false
  level_filter: "warn"
hash:
  argon2:
    algorithm: "Argon2id"
    version: "V0x13"
    salt: "cmVwbGFjZXRoaXNzYWx0"
token:
  jwt:
    secret: "s"
    expiry_duration: 60
store:
  json:
    path: "/tmp/db.json"
api:
  rest:
    host: "127.0.0.1"
    port: "3000"
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = super::new(file.path().to_str().unwrap());

        assert!(config.api().rest().allowed_origin().is_none());
    }
}
