use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CommentService;
use crate::models::comments::requests::CreateTeacherCommentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;

/// 教师给学生写评语
///
/// 学生必须选了该教师的某门课，评语挂到那门课上；
/// 未选课时返回 400 而不是 403，语义是"业务前置条件不满足"。
pub async fn create_comment(
    service: &CommentService,
    request: &HttpRequest,
    comment_data: CreateTeacherCommentRequest,
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
    let profile = match caller.require_teacher() {
        Ok(profile) => profile,
        Err(resp) => return Ok(resp),
    };

    // 学生必须选了当前教师的某门课
    let enrollment = match storage
        .find_enrollment_for_teacher(comment_data.student_id, profile.id)
        .await
    {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::StudentNotEnrolled,
                "Student is not enrolled in any of your courses",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询选课记录失败: {e}"),
                )),
            );
        }
    };

    match storage
        .create_comment(
            profile.id,
            comment_data.student_id,
            enrollment.course_id,
            comment_data.comment.trim(),
        )
        .await
    {
        Ok(comment) => {
            info!(
                "Comment {} created by teacher {} for student {}",
                comment.id, profile.id, comment.student_id
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
