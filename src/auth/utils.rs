use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::user::UserRole,
};

pub fn require_teacher(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Teacher {
        return Err(AppError::Unauthorized(
            "Only teachers can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner_or_teacher(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role != UserRole::Teacher && claims.sub != resource_owner {
        return Err(AppError::Unauthorized(
            "You can only access your own resources".to_string(),
        ));
    }
    Ok(())
}
