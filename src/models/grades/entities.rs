use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 成绩记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub value: f64,
    pub given_at: chrono::DateTime<chrono::Utc>,
}

// 成绩记录 + 课程名称（教师/管理员查看学生成绩单用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeWithCourse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub value: f64,
    pub given_at: chrono::DateTime<chrono::Utc>,
}
