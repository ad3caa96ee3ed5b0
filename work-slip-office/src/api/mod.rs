use actix_web::web;

pub mod dtos;
pub mod error;
pub mod reports;
pub mod session;
pub mod slips;

use error::ApiError;

const JSON_LIMIT: usize = 1024 * 1024;

/// Registers every endpoint. Unreadable JSON bodies and query strings are
/// answered as `400 {"error": ...}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .service(slips::list_slips)
    .service(slips::get_slip)
    .service(slips::create_slip)
    .service(slips::replace_slip)
    .service(slips::delete_slip)
    .service(session::login)
    .service(reports::summary)
    .service(reports::export_slips)
    .service(reports::export_totals);
}
