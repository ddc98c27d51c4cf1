use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 缺勤记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Absence {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: chrono::DateTime<chrono::Utc>,
    pub reason: Option<String>,
}

// 缺勤记录 + 课程名称
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceWithCourse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub reason: Option<String>,
}
