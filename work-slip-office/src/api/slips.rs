use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use domain_workslip::{exception::WorkSlipException, model::entity::WorkSlip};

use super::{error::ApiResult, session::authorize_editor};
use crate::infrastructure::ServiceProvider;

#[get("/api/slips")]
pub async fn list_slips(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    let slips = sp.work_slip_service().list().await?;
    Ok(HttpResponse::Ok().json(slips))
}

#[get("/api/slips/{id}")]
pub async fn get_slip(
    sp: web::Data<ServiceProvider>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    match sp.work_slip_service().get(&id).await? {
        Some(slip) => Ok(HttpResponse::Ok().json(slip)),
        None => Err(WorkSlipException::NotFound { id }.into()),
    }
}

#[post("/api/slips")]
pub async fn create_slip(
    sp: web::Data<ServiceProvider>,
    slip: web::Json<WorkSlip>,
) -> ApiResult<HttpResponse> {
    let created = sp.work_slip_service().create(slip.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/api/slips/{id}")]
pub async fn replace_slip(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    id: web::Path<String>,
    slip: web::Json<WorkSlip>,
) -> ApiResult<HttpResponse> {
    let editor = authorize_editor(&req, sp.auth_provider().as_ref())?;
    let replaced = sp
        .work_slip_service()
        .replace(&id, slip.into_inner())
        .await?;
    tracing::info!("{} replaced slip {}.", editor.username, replaced.id);
    Ok(HttpResponse::Ok().json(replaced))
}

#[delete("/api/slips/{id}")]
pub async fn delete_slip(
    sp: web::Data<ServiceProvider>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    sp.work_slip_service().delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
