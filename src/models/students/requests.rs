use serde::Deserialize;

// 创建学生请求：同时创建登录账号与学生档案
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

// 更新学生请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub full_name: String,
}
