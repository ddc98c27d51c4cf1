use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::SafeStudentId;

// 懒加载的全局 GRADE_SERVICE 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn grades_by_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.grades_by_student(&req, student_id.0).await
}

pub async fn grades_with_course(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.grades_with_course(&req, student_id.0).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                // 列表按角色在服务层过滤
                web::resource("").route(web::get().to(list_grades)).route(
                    web::post()
                        .to(create_grade)
                        // 仅课程归属教师可录入成绩
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                // 学生只能查自己的成绩，归属在服务层判定
                web::resource("/by-student/{student_id}")
                    .route(web::get().to(grades_by_student)),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(grades_with_course)
                        // 成绩单（附课程名）仅教务人员可用
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
