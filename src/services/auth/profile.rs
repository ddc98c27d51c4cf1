use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::responses::ProfileResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_profile(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            let profile = ProfileResponse {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
                role: user.role,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(profile, "查询成功")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing caller identity",
        ))),
    }
}
