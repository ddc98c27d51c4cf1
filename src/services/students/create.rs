use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验邮箱与密码策略
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }
    if let Err(msg) = validate_password_simple(&student_data.password) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::WeakPassword, msg))
        );
    }

    match storage.get_user_by_email(&student_data.email).await {
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
                    format!("创建学生失败: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建学生失败: 密码哈希失败",
                )),
            );
        }
    };

    // 先建账号，再建档案
    let user = match storage
        .create_user(
            &student_data.email,
            &password_hash,
            &student_data.full_name,
            UserRole::Student,
        )
        .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to create student account: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建学生失败: {e}"),
                )),
            );
        }
    };

    match storage.create_student(user.id).await {
        Ok(profile) => {
            info!("Student {} created for user {}", profile.id, user.id);
            let student = Student {
                id: profile.id,
                user_id: user.id,
                email: user.email,
                full_name: user.full_name,
                enrolled_at: profile.enrolled_at,
            };
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "学生创建成功")))
        }
        Err(e) => {
            error!("Failed to create student profile: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建学生失败: {e}"),
                )),
            )
        }
    }
}
