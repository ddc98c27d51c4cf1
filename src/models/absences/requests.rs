use serde::Deserialize;
use uuid::Uuid;

// 登记缺勤请求
#[derive(Debug, Deserialize)]
pub struct CreateAbsenceRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: chrono::DateTime<chrono::Utc>,
    pub reason: Option<String>,
}
