use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
