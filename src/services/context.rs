//! 请求级调用者上下文
//!
//! 每个请求只解析一次"调用者是谁"：JWT 中间件存入的用户，
//! 加上按用户 ID 查到的教师/学生档案行。上下文以引用传给
//! 所有权限判定，处理程序内不再各自隐式查询身份。

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::students::entities::StudentProfile;
use crate::models::teachers::entities::TeacherProfile;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

#[derive(Debug, Clone)]
pub struct CallerContext {
    pub user: User,
    pub teacher: Option<TeacherProfile>,
    pub student: Option<StudentProfile>,
}

impl CallerContext {
    /// 从请求解析调用者上下文
    ///
    /// 无法解析出已认证用户时返回 401 响应；
    /// 按角色补全对应的档案行（教师/学生），管理员没有档案行。
    pub async fn resolve(
        request: &HttpRequest,
        storage: &Arc<dyn Storage>,
    ) -> Result<Self, HttpResponse> {
        let user = match RequireJWT::extract_user_claims(request) {
            Some(user) => user,
            None => {
                return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing caller identity",
                )));
            }
        };

        let teacher = if user.role == UserRole::Teacher {
            match storage.get_teacher_profile_by_user_id(user.id).await {
                Ok(profile) => profile,
                Err(e) => {
                    error!("Failed to resolve teacher profile: {}", e);
                    return Err(internal_error());
                }
            }
        } else {
            None
        };

        let student = if user.role == UserRole::Student {
            match storage.get_student_profile_by_user_id(user.id).await {
                Ok(profile) => profile,
                Err(e) => {
                    error!("Failed to resolve student profile: {}", e);
                    return Err(internal_error());
                }
            }
        } else {
            None
        };

        Ok(Self {
            user,
            teacher,
            student,
        })
    }

    /// 要求调用者有教师档案
    ///
    /// 角色是教师但档案行缺失时返回 404，与档案未建的历史数据保持一致。
    pub fn require_teacher(&self) -> Result<&TeacherProfile, HttpResponse> {
        self.teacher.as_ref().ok_or_else(|| {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher profile not found",
            ))
        })
    }

    /// 要求调用者有学生档案
    pub fn require_student(&self) -> Result<&StudentProfile, HttpResponse> {
        self.student.as_ref().ok_or_else(|| {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student profile not found",
            ))
        })
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error while resolving caller",
    ))
}
