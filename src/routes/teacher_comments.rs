use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::comments::requests::CreateTeacherCommentRequest;
use crate::models::users::entities::UserRole;
use crate::services::CommentService;
use crate::utils::{SafeCommentId, SafeStudentId};

// 懒加载的全局 COMMENT_SERVICE 实例
static COMMENT_SERVICE: Lazy<CommentService> = Lazy::new(CommentService::new_lazy);

// HTTP处理程序
pub async fn list_comments(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.list_comments(&req).await
}

pub async fn create_comment(
    req: HttpRequest,
    comment_data: web::Json<CreateTeacherCommentRequest>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .create_comment(&req, comment_data.into_inner())
        .await
}

pub async fn delete_comment(
    req: HttpRequest,
    comment_id: SafeCommentId,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.delete_comment(&req, comment_id.0).await
}

pub async fn comments_for_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .comments_for_student(&req, student_id.0)
        .await
}

pub async fn my_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.my_students(&req).await
}

// 配置路由
pub fn configure_teacher_comments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teachercomments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_comments)).route(
                    web::post()
                        .to(create_comment)
                        // 教师给选了自己课的学生写评语
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/my-students").route(
                    web::get()
                        .to(my_students)
                        // 教师查询自己名下的学生
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                // 学生只能查自己的评语，归属在服务层判定
                web::resource("/student/{student_id}")
                    .route(web::get().to(comments_for_student)),
            )
            .service(
                web::resource("/{comment_id}").route(
                    web::delete()
                        .to(delete_comment)
                        // 仅评语作者可删除，归属在服务层判定
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            ),
    );
}
