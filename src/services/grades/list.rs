use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::GradeService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

/// 成绩列表：管理员看全部，教师看自己课程，学生不可用
pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    let result = match caller.user.role {
        UserRole::Admin => storage.list_all_grades().await,
        UserRole::Teacher => {
            let profile = match caller.require_teacher() {
                Ok(profile) => profile,
                Err(resp) => return Ok(resp),
            };
            storage.list_grades_by_teacher(profile.id).await
        }
        UserRole::Student => {
            // 学生请通过 /api/grades/by-student/{student_id} 查询自己的成绩
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Students cannot list grades through this endpoint",
            )));
        }
    };

    match result {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩列表失败: {e}"),
            )),
        ),
    }
}

/// 按学生查成绩；学生只能查自己的记录，目标学生是否存在不影响 403
pub async fn grades_by_student(
    service: &GradeService,
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
        return Ok(denial.into_response("You can only view your own grades"));
    }

    match storage.list_grades_by_student(student_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩失败: {e}"),
            )),
        ),
    }
}

/// 按学生查成绩单（附课程名），教务人员专用
pub async fn grades_with_course(
    service: &GradeService,
    request: &HttpRequest,
    student_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades_with_course_by_student(student_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩单失败: {e}"),
            )),
        ),
    }
}
