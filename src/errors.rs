//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schoolsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSysError {
            $($variant(String),)*
        }

        impl SchoolSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schoolsys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl SchoolSysError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 判断是否由存储层唯一约束触发
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, SchoolSysError::UniqueViolation(_))
    }
}

impl fmt::Display for SchoolSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return SchoolSysError::UniqueViolation(msg);
        }
        let msg = err.to_string();
        // sql_err 对部分后端不可用时退回文本匹配
        if msg.contains("UNIQUE constraint failed")
            || msg.contains("duplicate key value")
            || msg.contains("Duplicate entry")
        {
            SchoolSysError::UniqueViolation(msg)
        } else {
            SchoolSysError::DatabaseOperation(msg)
        }
    }
}

impl From<std::io::Error> for SchoolSysError {
    fn from(err: std::io::Error) -> Self {
        SchoolSysError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSysError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSysError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSysError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSysError::database_config("test").code(), "E001");
        assert_eq!(SchoolSysError::unique_violation("test").code(), "E004");
        assert_eq!(SchoolSysError::validation("test").code(), "E005");
        assert_eq!(SchoolSysError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSysError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            SchoolSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolSysError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_unique_violation_from_db_err() {
        let err: SchoolSysError = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: enrollments.student_id, enrollments.course_id".to_string(),
        )
        .into();
        assert!(err.is_unique_violation());

        let err: SchoolSysError =
            sea_orm::DbErr::Custom("connection reset by peer".to_string()).into();
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolSysError::validation("Invalid email");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid email"));
    }
}
