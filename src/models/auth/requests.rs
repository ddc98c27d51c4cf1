use serde::Deserialize;

use crate::models::users::entities::UserRole;

// 注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// 角色必须是 student / teacher / admin 之一，反序列化阶段即校验
    pub role: UserRole,
}

// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
