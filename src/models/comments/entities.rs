use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 教师评语
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherComment {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 教师评语 + 教师姓名与课程名称（学生端展示用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCommentWithDetails {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub teacher_name: String,
    pub course_name: String,
}

// 教师名下的学生及其所在课程（去重后的 (学生, 课程) 对）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentWithCourse {
    pub student_id: Uuid,
    pub student_name: String,
    pub course_id: Uuid,
    pub course_name: String,
}
