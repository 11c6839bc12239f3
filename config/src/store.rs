use serde::Deserialize;

#[derive(Deserialize)]
pub struct StoreConfig {
    json: JsonStoreConfig,
}

impl StoreConfig {
    pub fn json(&self) -> &JsonStoreConfig {
        &self.json
    }
}

#[derive(Deserialize)]
pub struct JsonStoreConfig {
    path: String,
}

impl JsonStoreConfig {
    pub fn path(&self) -> &str {
        &self.path
    }
}
