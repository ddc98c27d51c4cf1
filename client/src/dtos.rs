//! API 传输对象的客户端侧形态
//!
//! 标识符在客户端一律是不透明字符串，不解析其内部结构。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherDto {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub hired_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub teacher_id: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeDto {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub value: f64,
    pub given_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceDto {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCommentDto {
    pub id: String,
    pub teacher_id: String,
    pub student_id: String,
    pub course_id: String,
    pub comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponseDto {
    pub access_token: String,
    pub expires_in: i64,
    pub user: ProfileDto,
}
