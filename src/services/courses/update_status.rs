use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;
use uuid::Uuid;

use super::CourseService;
use crate::models::courses::requests::UpdateCourseStatusRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

pub async fn update_course_status(
    service: &CourseService,
    request: &HttpRequest,
    course_id: Uuid,
    update_data: UpdateCourseStatusRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    // 与其他课程端点一致：教师只能改自己课程的状态，管理员不受限
    if let Err(denial) = authorize(
        &caller,
        UserRole::staff_roles(),
        OwnershipRule::CourseTeacher(course.teacher_id),
    ) {
        return Ok(denial.into_response("You do not have permission to update this course"));
    }

    match storage
        .update_course_status(course_id, update_data.status)
        .await
    {
        Ok(true) => {
            info!(
                "Course {} status changed to {}",
                course_id, update_data.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course status updated")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程状态失败: {e}"),
            )),
        ),
    }
}
