use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::EvidenceUploadRequest,
    models::dto::response::UploadResponse,
    services::EvidenceService,
};

/// Evidence upload admission: the byte store is external, this endpoint
/// enforces its contract (size cap, MIME allow-list) and hands back the
/// storage reference the scoring record will carry.
#[post("/upload")]
pub async fn upload_evidence(
    request: web::Json<EvidenceUploadRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    EvidenceService::validate_upload(&request.content_type, request.size_bytes)?;

    let storage_key = EvidenceService::storage_key(&auth.0.sub, &request.file_name);

    Ok(HttpResponse::Ok().json(UploadResponse {
        url: EvidenceService::public_url(&storage_key),
        file_name: storage_key,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::assert_error_status;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_upload_requires_authentication() {
        let app = test::init_service(App::new().service(upload_evidence)).await;

        let body = serde_json::json!({
            "file_name": "minh-chung.pdf",
            "content_type": "application/pdf",
            "size_bytes": 1024
        });

        let req = test::TestRequest::post()
            .uri("/upload")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }
}
