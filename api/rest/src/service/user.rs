use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::Local;
use ub_dao::user::UserDao;
use ub_error::Error;
use ub_store_json::model::user::UserStatus;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        user::{
            DeleteOneUserReqPath, DeleteUserResJson, FindOneUserReqPath, InsertOneUserReqJson,
            UpdateOneUserReqJson, UpdateOneUserReqPath, UserResJson, UserStatisticsResJson,
        },
        PaginationRes, Response, TokenReqHeader,
    },
    service::require_admin,
};

pub fn user_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/add-user", web::post().to(insert_one))
        .route("/users", web::get().to(find_many))
        .route("/users/{user_id}", web::get().to(find_one))
        .route("/edituser/{user_id}", web::put().to(update_one))
        .route("/deleteuser/{user_id}", web::delete().to(delete_one))
        .route("/user-statistics", web::get().to(statistics));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    data: web::Json<InsertOneUserReqJson>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error(&Error::BadRequest(err.to_string()));
    }

    match UserDao::db_select_by_email(ctx.dao().store(), data.email()).await {
        Ok(Some(_)) => {
            return Response::error(&Error::Conflict(
                "User with this email already exists".to_owned(),
            ))
        }
        Ok(None) => (),
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    }

    let status = match data.status() {
        Some(status) => *status,
        None => UserStatus::Active,
    };

    let user_data = UserDao::new(
        data.name(),
        data.email(),
        data.phone(),
        data.age(),
        &status,
        data.role(),
        data.permissions(),
    );

    if let Err(err) = user_data.db_insert(ctx.dao().store()).await {
        return Response::error(&Error::InternalServerError(err.to_string()));
    }

    Response::data(&StatusCode::CREATED, &None, &user_res(&user_data))
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    let users_data = match UserDao::db_select_many(ctx.dao().store()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    let total = users_data.len();
    let users_res = users_data.iter().map(user_res).collect::<Vec<_>>();

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&total, &total)),
        &users_res,
    )
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<FindOneUserReqPath>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    match UserDao::db_select(ctx.dao().store(), path.user_id()).await {
        Ok(Some(user_data)) => Response::data(&StatusCode::OK, &None, &user_res(&user_data)),
        Ok(None) => Response::error(&Error::NotFound("User not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<UpdateOneUserReqPath>,
    data: web::Json<UpdateOneUserReqJson>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    if data.is_all_none() {
        return Response::error(&Error::BadRequest(
            "No request fields to be updated".to_owned(),
        ));
    }

    if let Err(err) = data.validate() {
        return Response::error(&Error::BadRequest(err.to_string()));
    }

    let mut user_data = match UserDao::db_select(ctx.dao().store(), path.user_id()).await {
        Ok(Some(data)) => data,
        Ok(None) => return Response::error(&Error::NotFound("User not found".to_owned())),
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    // Present-but-empty strings and a zero age are ignored, not applied.
    if let Some(name) = data.name() {
        if !name.is_empty() {
            user_data.set_name(name);
        }
    }

    if let Some(email) = data.email() {
        if !email.is_empty() && email != user_data.email() {
            match UserDao::db_select_by_email(ctx.dao().store(), email).await {
                Ok(Some(_)) => {
                    return Response::error(&Error::Conflict(
                        "User with this email already exists".to_owned(),
                    ))
                }
                Ok(None) => user_data.set_email(email),
                Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
            }
        }
    }

    if let Some(phone) = data.phone() {
        if !phone.is_empty() {
            user_data.set_phone(phone);
        }
    }

    if let Some(age) = data.age() {
        if *age != 0 {
            user_data.set_age(age);
        }
    }

    if let Some(status) = data.status() {
        user_data.set_status(status);
    }

    if let Some(role) = data.role() {
        user_data.set_role(role);
    }

    if let Some(permissions) = data.permissions() {
        user_data.set_permissions(permissions);
    }

    match user_data.db_update(ctx.dao().store()).await {
        Ok(true) => Response::data(&StatusCode::OK, &None, &user_res(&user_data)),
        Ok(false) => Response::error(&Error::NotFound("User not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<DeleteOneUserReqPath>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    match UserDao::db_delete(ctx.dao().store(), path.user_id()).await {
        Ok(true) => Response::data(
            &StatusCode::OK,
            &None,
            &DeleteUserResJson::new(path.user_id()),
        ),
        Ok(false) => Response::error(&Error::NotFound("User not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}

async fn statistics(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    let users_data = match UserDao::db_select_many(ctx.dao().store()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    let today = Local::now().date_naive();

    let total_users = users_data.len();
    let users_registered_today = users_data
        .iter()
        .filter(|user| user.created_at().with_timezone(&Local).date_naive() == today)
        .count();
    let active_users = users_data
        .iter()
        .filter(|user| user.status() == &UserStatus::Active)
        .count();
    let inactive_users = users_data
        .iter()
        .filter(|user| user.status() == &UserStatus::Inactive)
        .count();

    Response::data(
        &StatusCode::OK,
        &None,
        &UserStatisticsResJson::new(
            &total_users,
            &users_registered_today,
            &active_users,
            &inactive_users,
        ),
    )
}

fn user_res(user_data: &UserDao) -> UserResJson {
    UserResJson::new(
        user_data.id(),
        user_data.created_at(),
        user_data.updated_at(),
        user_data.name(),
        user_data.email(),
        user_data.phone(),
        user_data.age(),
        user_data.status(),
        user_data.role(),
        user_data.permissions(),
    )
}
