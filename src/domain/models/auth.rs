use serde::{Deserialize, Serialize};

/// JWT payload for the staff session credential. Signed HS256 with the
/// shared secret from config, valid for 24 hours.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

/// The identity a verified credential yields, attached to every
/// authenticated request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}
