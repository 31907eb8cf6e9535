use std::sync::Arc;

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_teacher, AuthenticatedUser},
    errors::AppError,
    models::domain::grade::GradeLevel,
    models::domain::notification::{Notification, NotificationKind},
    models::dto::request::{GradeRequest, GradingListQuery},
    models::dto::response::{ApiResponse, PaginatedResponse, ScoringRecordDto},
};

#[get("/grading")]
pub async fn list_for_grading(
    state: web::Data<Arc<AppState>>,
    query: web::Query<GradingListQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;

    let query = query.into_inner();
    let (records, total) = state
        .scoring_service
        .list_for_grading(query.status, query.offset(), query.limit())
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse {
        items: records
            .into_iter()
            .map(ScoringRecordDto::from)
            .collect::<Vec<_>>(),
        total,
    }))
}

#[put("/grading")]
pub async fn grade_score(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GradeRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;

    let request = request.into_inner();
    request.validate()?;

    let record = state.scoring_service.grade(&request).await?;

    if let Some(final_score) = record.final_score {
        state
            .notification_service
            .send_best_effort(Notification::new(
                "Kết quả rèn luyện",
                &format!(
                    "Phiếu chấm điểm của bạn đã được chấm. Điểm cuối cùng: {} ({})",
                    final_score,
                    GradeLevel::from_score(final_score).label()
                ),
                NotificationKind::Success,
                &auth.0.sub,
                None,
                vec![record.user_id.clone()],
            ))
            .await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse {
        data: ScoringRecordDto::from(record),
        message: "Score graded successfully".to_string(),
    }))
}
