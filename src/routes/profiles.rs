use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&req).await
}

// 配置路由
pub fn configure_profiles_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profiles")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/me").route(web::get().to(me))),
    );
}
