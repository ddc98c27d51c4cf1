use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::AbsenceService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

/// 缺勤列表：管理员看全部，教师看自己课程，学生不可用
pub async fn list_absences(
    service: &AbsenceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    let result = match caller.user.role {
        UserRole::Admin => storage.list_all_absences().await,
        UserRole::Teacher => {
            let profile = match caller.require_teacher() {
                Ok(profile) => profile,
                Err(resp) => return Ok(resp),
            };
            storage.list_absences_by_teacher(profile.id).await
        }
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Students cannot list absences through this endpoint",
            )));
        }
    };

    match result {
        Ok(absences) => Ok(HttpResponse::Ok().json(ApiResponse::success(absences, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询缺勤列表失败: {e}"),
            )),
        ),
    }
}

/// 按学生查缺勤；学生只能查自己的记录
pub async fn absences_by_student(
    service: &AbsenceService,
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
        return Ok(denial.into_response("You can only view your own absences"));
    }

    match storage.list_absences_by_student(student_id).await {
        Ok(absences) => Ok(HttpResponse::Ok().json(ApiResponse::success(absences, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询缺勤失败: {e}"),
            )),
        ),
    }
}

/// 按学生查缺勤记录（附课程名），教务人员专用
pub async fn absences_with_course(
    service: &AbsenceService,
    request: &HttpRequest,
    student_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_absences_with_course_by_student(student_id)
        .await
    {
        Ok(absences) => Ok(HttpResponse::Ok().json(ApiResponse::success(absences, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询缺勤记录失败: {e}"),
            )),
        ),
    }
}
