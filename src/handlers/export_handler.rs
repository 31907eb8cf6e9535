use std::sync::Arc;

use actix_web::{http::header, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_owner_or_teacher, AuthenticatedUser},
    errors::AppError,
    models::dto::request::ExportCsvRequest,
    services::ExportService,
};

/// CSV rendering of one scoring record, UTF-8 with BOM for spreadsheet
/// compatibility.
#[post("/export/csv")]
pub async fn export_csv(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ExportCsvRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let record = state.scoring_service.get_by_id(&request.record_id).await?;
    require_owner_or_teacher(&auth.0, &record.user_id)?;

    let user = state.user_service.get_user(&record.user_id).await?;
    let csv = ExportService::render_csv(&record, &user);
    let filename = ExportService::csv_filename(&user);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(csv))
}
