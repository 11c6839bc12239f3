use actix_web::web;

use crate::service::{auth::auth_api, record::record_api, root::root_api, user::user_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .service(
            web::scope("/auth")
                .configure(auth_api)
                .configure(user_api),
        )
        .service(web::scope("/api").configure(record_api));
}
