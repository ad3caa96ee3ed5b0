use actix_web::{get, http::header, web, HttpResponse};
use domain_workslip::model::vo::{CsvDownload, SlipFilter};

use super::{dtos::SlipFilterQuery, error::ApiResult};
use crate::infrastructure::ServiceProvider;

fn download(csv: CsvDownload) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(CsvDownload::CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", csv.file_name),
        ))
        .body(csv.bytes)
}

#[get("/api/reports/summary")]
pub async fn summary(
    sp: web::Data<ServiceProvider>,
    query: web::Query<SlipFilterQuery>,
) -> ApiResult<HttpResponse> {
    let filter = SlipFilter::try_from(query.into_inner())?;
    let summary = sp.report_service().summary(&filter).await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/api/export/slips.csv")]
pub async fn export_slips(
    sp: web::Data<ServiceProvider>,
    query: web::Query<SlipFilterQuery>,
) -> ApiResult<HttpResponse> {
    let filter = SlipFilter::try_from(query.into_inner())?;
    Ok(download(sp.export_service().slips_csv(&filter).await?))
}

#[get("/api/export/totals.csv")]
pub async fn export_totals(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    Ok(download(sp.export_service().totals_csv().await?))
}
