use serde::Deserialize;

// 创建教师请求：同时创建登录账号与教师档案
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

// 更新教师请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub full_name: String,
}
