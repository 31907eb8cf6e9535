use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_owner_or_teacher, require_teacher, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateStudentRequest, PaginationParams},
    models::dto::response::{ApiResponse, PaginatedResponse, UserDto},
};

#[get("/users/{uid}")]
pub async fn get_user(
    state: web::Data<Arc<AppState>>,
    uid: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner_or_teacher(&auth.0, &uid)?;

    let user = state.user_service.get_user(&uid).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

#[get("/students")]
pub async fn get_students(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;

    let (students, total) = state
        .user_service
        .list_students(query.offset(), query.limit())
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse {
        items: students.into_iter().map(UserDto::from).collect::<Vec<_>>(),
        total,
    }))
}

#[post("/students")]
pub async fn create_student(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateStudentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;

    let request = request.into_inner();
    request.validate()?;

    let user = state.user_service.create_student(request).await?;

    Ok(HttpResponse::Created().json(ApiResponse {
        data: UserDto::from(user),
        message: "Student created successfully".to_string(),
    }))
}
