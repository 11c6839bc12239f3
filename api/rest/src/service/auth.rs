use actix_web::{http::StatusCode, web, HttpResponse};
use ub_dao::admin::{AdminDao, ADMIN_ROLE};
use ub_error::Error;
use ub_token_jwt::role::ClaimRole;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{AuthTokenResJson, LoginReqJson, SignupReqJson, SignupResJson},
        Response,
    },
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login));
}

async fn signup(ctx: web::Data<ApiRestCtx>, data: web::Json<SignupReqJson>) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error(&Error::BadRequest(err.to_string()));
    }

    // Duplicate email outranks the role check: a repeated registration is a
    // conflict no matter what role it asks for.
    match AdminDao::db_select_by_email(ctx.dao().store(), data.email()).await {
        Ok(Some(_)) => {
            return Response::error(&Error::Conflict(
                "Admin with this email already exists".to_owned(),
            ))
        }
        Ok(None) => (),
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    }

    if data.role() != ADMIN_ROLE {
        return Response::error(&Error::Forbidden(
            "Only admin accounts can be created".to_owned(),
        ));
    }

    let password_hash = match ctx.hash().argon2().hash_password(data.password().as_bytes()) {
        Ok(hash) => hash,
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    let admin_data = AdminDao::new(data.email(), &password_hash.to_string());

    if let Err(err) = admin_data.db_insert(ctx.dao().store()).await {
        return Response::error(&Error::InternalServerError(err.to_string()));
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &SignupResJson::new(admin_data.id()),
    )
}

async fn login(ctx: web::Data<ApiRestCtx>, data: web::Json<LoginReqJson>) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error(&Error::BadRequest(err.to_string()));
    }

    let admin_data = match AdminDao::db_select_by_email(ctx.dao().store(), data.email()).await {
        Ok(Some(data)) => data,
        Ok(None) => return Response::error(&Error::NotFound("Admin not found".to_owned())),
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    if ctx
        .hash()
        .argon2()
        .verify_password(data.password(), admin_data.password_hash())
        .is_err()
    {
        return Response::error(&Error::Unauthorized("Invalid credentials".to_owned()));
    }

    let token = match ctx
        .token()
        .jwt()
        .encode(admin_data.id(), admin_data.email(), &ClaimRole::Admin)
    {
        Ok(token) => token,
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}
