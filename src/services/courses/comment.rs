use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};
use uuid::Uuid;

use super::CourseService;
use crate::models::courses::requests::CreateCourseCommentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

/// 在课程下创建评语，评语作者记为课程的授课教师
pub async fn create_comment(
    service: &CourseService,
    request: &HttpRequest,
    course_id: Uuid,
    comment_data: CreateCourseCommentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if comment_data.comment.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Comment is required",
        )));
    }

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

    // 评语作者必须是课程的授课教师
    if let Err(denial) = authorize(
        &caller,
        UserRole::teacher_roles(),
        OwnershipRule::CourseTeacher(course.teacher_id),
    ) {
        return Ok(denial.into_response("You do not have permission to comment in this course"));
    }

    // 学生必须存在
    match storage.get_student_by_id(comment_data.student_id).await {
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

    match storage
        .create_comment(
            course.teacher_id,
            comment_data.student_id,
            course_id,
            comment_data.comment.trim(),
        )
        .await
    {
        Ok(comment) => {
            info!(
                "Comment {} created in course {} for student {}",
                comment.id, course_id, comment.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(comment, "评语创建成功")))
        }
        Err(e) => {
            error!("Comment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建评语失败: {e}"),
                )),
            )
        }
    }
}
