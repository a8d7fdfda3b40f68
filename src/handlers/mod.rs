pub mod evaluation_handler;
pub mod health_handler;
pub mod page_handler;

use actix_web::web;

pub use evaluation_handler::{acquire_content, create_evaluation, list_principles};
pub use health_handler::{health_check, health_check_live};
pub use page_handler::{index, submit_evaluation};

/// Body limit for form and JSON submissions. Form posts percent-encode
/// markup, so 2,000,000 characters of pasted HTML can need several times as
/// many bytes on the wire.
pub const MAX_REQUEST_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(MAX_REQUEST_BODY_BYTES))
        .app_data(web::JsonConfig::default().limit(MAX_REQUEST_BODY_BYTES))
        .service(index)
        .service(submit_evaluation)
        .service(create_evaluation)
        .service(acquire_content)
        .service(list_principles)
        .service(health_check)
        .service(health_check_live);
}
