//! Route configuration for the stub responder

pub mod foo;
pub mod health;

use crate::core::fetch::FOO_PATH;
use actix_web::web;

/// Register every stub route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(FOO_PATH).to(foo::foo))
        .route("/health", web::get().to(health::health_check));
}
