use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct SignupReqJson {
    #[validate(email)]
    email: String,
    password: String,
    role: String,
}

impl SignupReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[derive(Deserialize, Validate)]
pub struct LoginReqJson {
    #[validate(email)]
    email: String,
    password: String,
}

impl LoginReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Serialize)]
pub struct SignupResJson {
    id: Uuid,
}

impl SignupResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

#[derive(Serialize)]
pub struct AuthTokenResJson {
    token: String,
}

impl AuthTokenResJson {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }
}
