use serde::Deserialize;
use uuid::Uuid;

use super::entities::CourseStatus;

// 创建课程请求（仅管理员，必须指定授课教师）
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Uuid,
}

// 更新课程状态请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseStatusRequest {
    pub status: CourseStatus,
}

// 选课请求
#[derive(Debug, Deserialize)]
pub struct EnrollmentRequest {
    pub student_id: Uuid,
}

// 课程内评语请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseCommentRequest {
    pub student_id: Uuid,
    pub comment: String,
}
