use serde::Deserialize;
use uuid::Uuid;

// 创建评语请求：课程由学生在本教师名下的选课记录推导
#[derive(Debug, Deserialize)]
pub struct CreateTeacherCommentRequest {
    pub student_id: Uuid,
    pub comment: String,
}
