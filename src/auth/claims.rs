use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user uid)
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.uid.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user = User::new_student("uid-1", "an@example.com", "Nguyễn Văn A", "SV2024001");
        let claims = Claims::new(&user, 24);

        assert_eq!(claims.sub, "uid-1");
        assert_eq!(claims.email, "an@example.com");
        assert_eq!(claims.role, UserRole::Student);
        assert!(claims.exp > claims.iat);
    }
}
