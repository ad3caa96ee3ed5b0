use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine};
use domain_workslip::{
    exception::WorkSlipException,
    model::vo::{Credentials, Identity},
    service::AuthProvider,
};

use super::error::ApiResult;
use crate::infrastructure::ServiceProvider;

/// Credentials of an `Authorization: Basic ...` header.
pub fn basic_credentials(req: &HttpRequest) -> Option<Credentials> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = String::from_utf8(STANDARD.decode(encoded.trim()).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(Credentials::new(username, password))
}

/// The identity behind the request's basic credentials.
pub fn authenticate(req: &HttpRequest, provider: &dyn AuthProvider) -> ApiResult<Identity> {
    basic_credentials(req)
        .and_then(|el| provider.authenticate(&el))
        .ok_or_else(|| WorkSlipException::Unauthorized.into())
}

/// The identity behind the request, which must be allowed to edit slips.
pub fn authorize_editor(req: &HttpRequest, provider: &dyn AuthProvider) -> ApiResult<Identity> {
    let identity = authenticate(req, provider)?;
    if !identity.can_edit() {
        return Err(WorkSlipException::Forbidden {
            username: identity.username,
        }
        .into());
    }
    Ok(identity)
}

#[post("/api/session")]
pub async fn login(
    sp: web::Data<ServiceProvider>,
    credentials: web::Json<Credentials>,
) -> ApiResult<HttpResponse> {
    let identity = sp
        .auth_provider()
        .authenticate(&credentials)
        .ok_or(WorkSlipException::Unauthorized)?;
    tracing::info!("{} signed in.", identity.username);
    Ok(HttpResponse::Ok().json(identity))
}
