//! 路径参数提取器
//!
//! 在进入处理程序之前将路径中的标识符解析为 Uuid，
//! 解析失败直接返回 400，避免每个处理程序重复解析逻辑。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};
use uuid::Uuid;

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_uuid_extractors {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            // 路径参数安全提取器，要求对应路径段为合法 UUID
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub Uuid);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let raw = req.match_info().get($param).unwrap_or_default();
                    match Uuid::parse_str(raw) {
                        Ok(id) => ready(Ok($name(id))),
                        Err(_) => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::InvalidIdentifier,
                                    format!("Invalid {}: expected a UUID", $param),
                                ),
                            );
                            ready(Err(actix_web::error::InternalError::from_response(
                                "invalid identifier",
                                response,
                            )
                            .into()))
                        }
                    }
                }
            }
        )*
    };
}

define_safe_uuid_extractors! {
    SafeStudentId("student_id"),
    SafeTeacherId("teacher_id"),
    SafeCourseId("course_id"),
    SafeCommentId("comment_id"),
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_uuid_accepted() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .param("student_id", id.to_string())
            .to_http_request();
        let extracted = SafeStudentId::extract(&req).await.unwrap();
        assert_eq!(extracted.0, id);
    }

    #[actix_web::test]
    async fn test_malformed_uuid_rejected() {
        let req = TestRequest::default()
            .param("course_id", "not-a-uuid")
            .to_http_request();
        assert!(SafeCourseId::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_missing_param_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(SafeTeacherId::extract(&req).await.is_err());
    }
}
