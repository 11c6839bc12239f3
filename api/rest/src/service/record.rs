use actix_web::{http::StatusCode, web, HttpResponse};
use ub_dao::record::RecordDao;
use ub_error::Error;

use crate::{
    context::ApiRestCtx,
    model::{
        record::{
            DeleteOneRecordReqPath, DeleteRecordResJson, FindManyRecordReqPath,
            FindOneRecordReqPath, InsertOneRecordReqJson, InsertOneRecordReqPath,
            UpdateOneRecordReqJson, UpdateOneRecordReqPath,
        },
        PaginationRes, Response, TokenReqHeader,
    },
    service::require_admin,
};

pub fn record_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/{collection}", web::get().to(find_many))
        .route("/{collection}", web::post().to(insert_one))
        .route("/{collection}/{record_id}", web::get().to(find_one))
        .route("/{collection}/{record_id}", web::patch().to(update_one))
        .route("/{collection}/{record_id}", web::delete().to(delete_one));
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<FindManyRecordReqPath>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    let records_data = match RecordDao::db_select_many(ctx.dao().store(), path.collection()).await
    {
        Ok(data) => data,
        Err(err) => return Response::error(&Error::InternalServerError(err.to_string())),
    };

    let total = records_data.len();
    let records_res = records_data
        .iter()
        .map(|record_data| record_data.data().clone())
        .collect::<Vec<_>>();

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&total, &total)),
        &records_res,
    )
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<InsertOneRecordReqPath>,
    data: web::Json<InsertOneRecordReqJson>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    let record_data = RecordDao::new(path.collection(), &data);

    if let Err(err) = record_data.db_insert(ctx.dao().store()).await {
        return Response::error(&Error::InternalServerError(err.to_string()));
    }

    Response::data(&StatusCode::CREATED, &None, record_data.data())
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<FindOneRecordReqPath>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    match RecordDao::db_select(ctx.dao().store(), path.collection(), path.record_id()).await {
        Ok(Some(record_data)) => Response::data(&StatusCode::OK, &None, record_data.data()),
        Ok(None) => Response::error(&Error::NotFound("Record not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<UpdateOneRecordReqPath>,
    data: web::Json<UpdateOneRecordReqJson>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    match RecordDao::db_merge(ctx.dao().store(), path.collection(), path.record_id(), &data).await
    {
        Ok(Some(record_data)) => Response::data(&StatusCode::OK, &None, record_data.data()),
        Ok(None) => Response::error(&Error::NotFound("Record not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    token: web::Header<TokenReqHeader>,
    path: web::Path<DeleteOneRecordReqPath>,
) -> HttpResponse {
    if let Err(err) = require_admin(&ctx, token.get()).await {
        return Response::error(&err);
    }

    match RecordDao::db_delete(ctx.dao().store(), path.collection(), path.record_id()).await {
        Ok(true) => Response::data(
            &StatusCode::OK,
            &None,
            &DeleteRecordResJson::new(path.record_id()),
        ),
        Ok(false) => Response::error(&Error::NotFound("Record not found".to_owned())),
        Err(err) => Response::error(&Error::InternalServerError(err.to_string())),
    }
}
