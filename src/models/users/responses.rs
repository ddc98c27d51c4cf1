use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::UserRole;

// 个人资料响应（/api/profiles/me）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}
