use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 课程状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    NotStarted, // 未开课
    InProgress, // 进行中
    Completed,  // 已结课
}

impl CourseStatus {
    pub const NOT_STARTED: &'static str = "not_started";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const COMPLETED: &'static str = "completed";
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CourseStatus::NOT_STARTED => Ok(CourseStatus::NotStarted),
            CourseStatus::IN_PROGRESS => Ok(CourseStatus::InProgress),
            CourseStatus::COMPLETED => Ok(CourseStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的课程状态: '{s}'. 支持的状态: not_started, in_progress, completed"
            ))),
        }
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::NotStarted => write!(f, "{}", CourseStatus::NOT_STARTED),
            CourseStatus::InProgress => write!(f, "{}", CourseStatus::IN_PROGRESS),
            CourseStatus::Completed => write!(f, "{}", CourseStatus::COMPLETED),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(CourseStatus::NotStarted),
            "in_progress" => Ok(CourseStatus::InProgress),
            "completed" => Ok(CourseStatus::Completed),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

// 课程传输对象：附带授课教师姓名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: CourseStatus,
    pub teacher_id: Uuid,
    pub teacher_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for (s, status) in [
            ("not_started", CourseStatus::NotStarted),
            ("in_progress", CourseStatus::InProgress),
            ("completed", CourseStatus::Completed),
        ] {
            assert_eq!(s.parse::<CourseStatus>().unwrap(), status);
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("cancelled".parse::<CourseStatus>().is_err());
        assert!(serde_json::from_str::<CourseStatus>("\"cancelled\"").is_err());
    }
}
