use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::CommentService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

/// 评语列表：管理员看全部，教师看自己写的，学生不可用
pub async fn list_comments(
    service: &CommentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    let result = match caller.user.role {
        UserRole::Admin => storage.list_all_comments().await,
        UserRole::Teacher => {
            let profile = match caller.require_teacher() {
                Ok(profile) => profile,
                Err(resp) => return Ok(resp),
            };
            storage.list_comments_by_teacher(profile.id).await
        }
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Students cannot list comments through this endpoint",
            )));
        }
    };

    match result {
        Ok(comments) => Ok(HttpResponse::Ok().json(ApiResponse::success(comments, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评语列表失败: {e}"),
            )),
        ),
    }
}

/// 按学生查评语；学生只能查自己的评语
pub async fn comments_for_student(
    service: &CommentService,
    request: &HttpRequest,
    student_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    if let Err(denial) = authorize(
        &caller,
        UserRole::all_roles(),
        OwnershipRule::StudentSelf(student_id),
    ) {
        return Ok(denial.into_response("You can only view comments about yourself"));
    }

    match storage.list_comments_for_student(student_id).await {
        Ok(comments) => Ok(HttpResponse::Ok().json(ApiResponse::success(comments, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评语失败: {e}"),
            )),
        ),
    }
}

/// 当前教师名下的 (学生, 课程) 列表
pub async fn my_students(
    service: &CommentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };
    let profile = match caller.require_teacher() {
        Ok(profile) => profile,
        Err(resp) => return Ok(resp),
    };

    match storage.list_teacher_students(profile.id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学生列表失败: {e}"),
            )),
        ),
    }
}
