use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;
use uuid::Uuid;

use super::CommentService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CallerContext;
use crate::services::guard::{OwnershipRule, authorize};

pub async fn delete_comment(
    service: &CommentService,
    request: &HttpRequest,
    comment_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match CallerContext::resolve(request, &storage).await {
        Ok(caller) => caller,
        Err(resp) => return Ok(resp),
    };

    let comment = match storage.get_comment_by_id(comment_id).await {
        Ok(Some(comment)) => comment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CommentNotFound,
                "Comment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评语失败: {e}"),
                )),
            );
        }
    };

    // 只有评语作者可以删除
    if let Err(denial) = authorize(
        &caller,
        UserRole::teacher_roles(),
        OwnershipRule::CommentAuthor(comment.teacher_id),
    ) {
        return Ok(denial.into_response("You can only delete your own comments"));
    }

    match storage.delete_comment(comment_id).await {
        Ok(true) => {
            info!("Comment {} deleted", comment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Comment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CommentNotFound,
            "Comment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除评语失败: {e}"),
            )),
        ),
    }
}
