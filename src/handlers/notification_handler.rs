use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_teacher, AuthenticatedUser},
    errors::AppError,
    models::domain::notification::Notification,
    models::dto::request::{PaginationParams, SendNotificationRequest},
    models::dto::response::ApiResponse,
};

#[post("/notifications/send")]
pub async fn send_notification(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SendNotificationRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;

    let request = request.into_inner();
    request.validate()?;

    let notification = state
        .notification_service
        .send(Notification::new(
            &request.title,
            &request.message,
            request.kind,
            &auth.0.sub,
            request.target_role,
            request.target_users,
        ))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        data: notification,
        message: "Notification sent successfully".to_string(),
    }))
}

#[get("/notifications")]
pub async fn list_notifications(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let notifications = state
        .notification_service
        .list_for_user(&auth.0.sub, auth.0.role, query.limit())
        .await?;

    Ok(HttpResponse::Ok().json(notifications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::assert_error_status;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_send_notification_requires_authentication() {
        let app = test::init_service(App::new().service(send_notification)).await;

        let body = serde_json::json!({
            "title": "Thông báo",
            "message": "Hạn nộp phiếu chấm điểm là 30/06",
            "target_role": "student"
        });

        let req = test::TestRequest::post()
            .uri("/notifications/send")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }

    #[actix_web::test]
    async fn test_list_notifications_requires_authentication() {
        let app = test::init_service(App::new().service(list_notifications)).await;

        let req = test::TestRequest::get().uri("/notifications").to_request();

        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }
}
