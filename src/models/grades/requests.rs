use serde::Deserialize;
use uuid::Uuid;

// 录入成绩请求
#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub value: f64,
}
