use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::TeacherService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

/// 当前教师的课程列表
pub async fn my_courses(
    service: &TeacherService,
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

    match storage.list_courses_by_teacher(profile.id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程列表失败: {e}"),
            )),
        ),
    }
}

/// 当前教师某课程下的学生列表
pub async fn my_course_students(
    service: &TeacherService,
    request: &HttpRequest,
    course_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    // 课程必须存在且归当前教师所有
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

    if let Err(denial) = authorize(
        &caller,
        UserRole::teacher_roles(),
        OwnershipRule::CourseTeacher(course.teacher_id),
    ) {
        return Ok(denial.into_response("You do not have permission to view this course's students"));
    }

    match storage.list_course_students(course_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程学生失败: {e}"),
            )),
        ),
    }
}
