use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_email(&teacher_data.email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }
    if let Err(msg) = validate_password_simple(&teacher_data.password) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::WeakPassword, msg))
        );
    }

    match storage.get_user_by_email(&teacher_data.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check email: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建教师失败: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建教师失败: 密码哈希失败",
                )),
            );
        }
    };

    let user = match storage
        .create_user(
            &teacher_data.email,
            &password_hash,
            &teacher_data.full_name,
            UserRole::Teacher,
        )
        .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to create teacher account: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建教师失败: {e}"),
                )),
            );
        }
    };

    match storage.create_teacher(user.id).await {
        Ok(profile) => {
            info!("Teacher {} created for user {}", profile.id, user.id);
            let teacher = Teacher {
                id: profile.id,
                user_id: user.id,
                email: user.email,
                full_name: user.full_name,
                hired_at: profile.hired_at,
            };
            Ok(HttpResponse::Created().json(ApiResponse::success(teacher, "教师创建成功")))
        }
        Err(e) => {
            error!("Failed to create teacher profile: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建教师失败: {e}"),
                )),
            )
        }
    }
}
