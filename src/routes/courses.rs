use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CreateCourseCommentRequest, CreateCourseRequest, EnrollmentRequest, UpdateCourseStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeCourseId, SafeStudentId};

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn my_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.my_courses(&req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course_status(
    req: HttpRequest,
    course_id: SafeCourseId,
    update_data: web::Json<UpdateCourseStatusRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course_status(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeCourseId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn enroll(
    req: HttpRequest,
    course_id: SafeCourseId,
    enrollment: web::Json<EnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .enroll(&req, course_id.0, enrollment.into_inner())
        .await
}

pub async fn unenroll(
    req: HttpRequest,
    course_id: SafeCourseId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .unenroll(&req, course_id.0, student_id.0)
        .await
}

pub async fn create_comment(
    req: HttpRequest,
    course_id: SafeCourseId,
    comment_data: web::Json<CreateCourseCommentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_comment(&req, course_id.0, comment_data.into_inner())
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有已认证用户可以查看课程列表
                web::resource("").route(web::get().to(list_courses)).route(
                    web::post()
                        .to(create_course)
                        // 仅管理员可创建课程并指定授课教师
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/mine").route(
                    web::get()
                        .to(my_courses)
                        // 教师查询自己的课程
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::delete()
                            .to(delete_course)
                            // 管理员或课程归属教师可删除，归属在服务层判定
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{course_id}/status").route(
                    web::patch()
                        .to(update_course_status)
                        // 教师改自己课程的状态，管理员不受限
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{course_id}/enrollments").route(
                    web::post()
                        .to(enroll)
                        // 课程归属教师为学生选课
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{course_id}/enrollments/{student_id}").route(
                    web::delete()
                        .to(unenroll)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{course_id}/comments").route(
                    web::post()
                        .to(create_comment)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            ),
    );
}
