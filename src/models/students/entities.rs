use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 学生档案（数据库行，用于权限判定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

// 学生传输对象：档案 + 用户展示字段打平一层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
