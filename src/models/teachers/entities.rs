use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 教师档案（数据库行，用于权限判定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hired_at: chrono::DateTime<chrono::Utc>,
}

// 教师传输对象：档案 + 用户展示字段打平一层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub hired_at: chrono::DateTime<chrono::Utc>,
}
