use serde::Deserialize;

#[derive(Deserialize)]
pub struct ApiConfig {
    rest: ApiRestConfig,
}

impl ApiConfig {
    pub fn rest(&self) -> &ApiRestConfig {
        &self.rest
    }
}

#[derive(Deserialize)]
pub struct ApiRestConfig {
    host: String,
    port: String,
    allowed_origin: Option<String>,
}

impl ApiRestConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn allowed_origin(&self) -> &Option<String> {
        &self.allowed_origin
    }
}
