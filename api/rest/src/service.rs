use actix_web::web;
use jsonwebtoken::errors::ErrorKind;
use ub_dao::admin::AdminDao;
use ub_error::Error;
use ub_token_jwt::role::ClaimRole;

use crate::context::ApiRestCtx;

pub mod auth;
pub mod record;
pub mod root;
pub mod user;

/// Admin gate shared by every protected operation: header present, token
/// decodes and is not expired, claim role is admin, and the claimed account
/// still exists. Runs to completion before any handler touches domain data.
async fn require_admin(
    ctx: &web::Data<ApiRestCtx>,
    token: Option<&str>,
) -> Result<AdminDao, Error> {
    let token = match token {
        Some(token) => token,
        None => {
            return Err(Error::Unauthorized(
                "Authorization token is required".to_owned(),
            ))
        }
    };

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(claim) => claim,
        Err(err) => match err.kind() {
            ErrorKind::ExpiredSignature => {
                return Err(Error::Unauthorized("Token has expired".to_owned()))
            }
            _ => return Err(Error::Unauthorized("Invalid token".to_owned())),
        },
    };

    if token_claim.role() != &ClaimRole::Admin {
        return Err(Error::Forbidden(
            "Only admins can perform this operation".to_owned(),
        ));
    }

    match AdminDao::db_select(ctx.dao().store(), token_claim.sub()).await {
        Ok(Some(admin_data)) => Ok(admin_data),
        Ok(None) => Err(Error::Unauthorized(
            "Admin account no longer exists".to_owned(),
        )),
        Err(err) => Err(Error::InternalServerError(err.to_string())),
    }
}
