use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::domain::notification::{Notification, NotificationKind},
    models::domain::user::UserRole,
    models::dto::request::{SaveScoringRequest, ScoringAction, ScoringQuery},
    models::dto::response::{ApiResponse, ScoringRecordDto},
};

/// The student's record for the requested period, created as a zeroed
/// draft on first access.
#[get("/scores")]
pub async fn get_scores(
    state: web::Data<Arc<AppState>>,
    query: web::Query<ScoringQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let record = state
        .scoring_service
        .get_or_create(&auth.0.sub, query.semester, &query.academic_year)
        .await?;

    Ok(HttpResponse::Ok().json(ScoringRecordDto::from(record)))
}

#[post("/scores")]
pub async fn save_scores(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SaveScoringRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (record, message) = match request.action {
        ScoringAction::Save => {
            let record = state.scoring_service.save_draft(&auth.0.sub, &request).await?;
            (record, "Phiếu chấm điểm đã được lưu thành công")
        }
        ScoringAction::Submit => {
            let record = state.scoring_service.submit(&auth.0.sub, &request).await?;

            state
                .notification_service
                .send_best_effort(Notification::new(
                    "Phiếu chấm điểm mới",
                    &format!(
                        "Sinh viên {} đã gửi phiếu chấm điểm học kỳ {} năm học {}",
                        auth.0.full_name,
                        record.semester.as_str(),
                        record.academic_year
                    ),
                    NotificationKind::Info,
                    &auth.0.sub,
                    Some(UserRole::Teacher),
                    vec![],
                ))
                .await;

            (record, "Phiếu chấm điểm đã được gửi thành công")
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse {
        data: ScoringRecordDto::from(record),
        message: message.to_string(),
    }))
}
