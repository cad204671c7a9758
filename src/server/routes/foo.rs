//! The fixed `/foo` endpoint

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

/// Body served for every `/foo` request
pub const STUB_PAYLOAD: &str = r#"[{"id":"1"}]"#;

/// Answers any method with the fixed payload; the request body is never read
pub async fn foo(req: HttpRequest) -> HttpResponse {
    debug!(
        method = %req.method(),
        query = req.query_string(),
        "Stub request"
    );

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(STUB_PAYLOAD)
}
