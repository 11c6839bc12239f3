use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::ClaimRole;

#[derive(Debug, Deserialize, Serialize)]
pub struct Claim {
    sub: Uuid,
    email: String,
    role: ClaimRole,
    exp: usize,
}

impl Claim {
    pub fn new(sub: &Uuid, email: &str, role: &ClaimRole, exp: &usize) -> Self {
        Self {
            sub: *sub,
            email: email.to_owned(),
            role: *role,
            exp: *exp,
        }
    }

    pub fn sub(&self) -> &Uuid {
        &self.sub
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &ClaimRole {
        &self.role
    }

    pub fn exp(&self) -> &usize {
        &self.exp
    }
}
