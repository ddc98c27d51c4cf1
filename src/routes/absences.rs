use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::absences::requests::CreateAbsenceRequest;
use crate::models::users::entities::UserRole;
use crate::services::AbsenceService;
use crate::utils::SafeStudentId;

// 懒加载的全局 ABSENCE_SERVICE 实例
static ABSENCE_SERVICE: Lazy<AbsenceService> = Lazy::new(AbsenceService::new_lazy);

// HTTP处理程序
pub async fn list_absences(req: HttpRequest) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.list_absences(&req).await
}

pub async fn create_absence(
    req: HttpRequest,
    absence_data: web::Json<CreateAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .create_absence(&req, absence_data.into_inner())
        .await
}

pub async fn absences_by_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .absences_by_student(&req, student_id.0)
        .await
}

pub async fn absences_with_course(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .absences_with_course(&req, student_id.0)
        .await
}

// 配置路由
pub fn configure_absences_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/absences")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_absences)).route(
                    web::post()
                        .to(create_absence)
                        // 仅课程归属教师可登记缺勤
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                // 学生只能查自己的缺勤，归属在服务层判定
                web::resource("/by-student/{student_id}")
                    .route(web::get().to(absences_by_student)),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(absences_with_course)
                        // 缺勤记录（附课程名）仅教务人员可用
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
