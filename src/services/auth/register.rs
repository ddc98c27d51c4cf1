use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, auth::RegisterRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 验证邮箱格式
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    // 2. 验证密码策略
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::WeakPassword, msg))
        );
    }

    // 3. 检查邮箱是否已被占用
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Register failed while checking email: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    // 4. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Register failed: unable to hash password",
                )),
            );
        }
    };

    // 5. 创建用户
    let user = match storage
        .create_user(
            &register_request.email,
            &password_hash,
            &register_request.full_name,
            register_request.role,
        )
        .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("Register failed while creating user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Register failed: {e}"),
                )),
            );
        }
    };

    // 6. 按角色补建档案行，保证学生/教师账号注册后立即可用
    let profile_result = match user.role {
        UserRole::Student => storage.create_student(user.id).await.map(|_| ()),
        UserRole::Teacher => storage.create_teacher(user.id).await.map(|_| ()),
        UserRole::Admin => Ok(()),
    };
    if let Err(e) = profile_result {
        error!("Register failed while creating profile: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Register failed: {e}"),
            )),
        );
    }

    info!("User {} registered with role {}", user.email, user.role);
    Ok(HttpResponse::Created().json(ApiResponse::success(user, "Registered")))
}
