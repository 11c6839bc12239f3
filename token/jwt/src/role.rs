use serde::{Deserialize, Serialize};

/// Coarse authorization label carried inside a token. Only `Admin` grants
/// access to the management endpoints.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum ClaimRole {
    Admin,
    User,
}
