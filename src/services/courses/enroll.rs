use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};
use uuid::Uuid;

use super::CourseService;
use crate::models::courses::requests::EnrollmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

pub async fn enroll(
    service: &CourseService,
    request: &HttpRequest,
    course_id: Uuid,
    enrollment: EnrollmentRequest,
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

    // 只有课程归属教师可以为学生选课
    if let Err(denial) = authorize(
        &caller,
        UserRole::teacher_roles(),
        OwnershipRule::CourseTeacher(course.teacher_id),
    ) {
        return Ok(denial.into_response("You do not have permission to enroll students in this course"));
    }

    // 学生必须存在
    match storage.get_student_by_id(enrollment.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    // 唯一索引兜底并发下的重复选课
    match storage
        .create_enrollment(enrollment.student_id, course_id)
        .await
    {
        Ok(record) => {
            info!(
                "Student {} enrolled in course {}",
                enrollment.student_id, course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(record, "选课成功")))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AlreadyEnrolled, "Already enrolled"),
        )),
        Err(e) => {
            error!("Enrollment failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("选课失败: {e}"),
                )),
            )
        }
    }
}

pub async fn unenroll(
    service: &CourseService,
    request: &HttpRequest,
    course_id: Uuid,
    student_id: Uuid,
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

    if let Err(denial) = authorize(
        &caller,
        UserRole::teacher_roles(),
        OwnershipRule::CourseTeacher(course.teacher_id),
    ) {
        return Ok(denial.into_response("You do not have permission to unenroll students from this course"));
    }

    match storage.delete_enrollment(course_id, student_id).await {
        Ok(true) => {
            info!(
                "Student {} unenrolled from course {}",
                student_id, course_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Unenrolled successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("退课失败: {e}"),
            )),
        ),
    }
}
