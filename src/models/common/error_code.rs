/// 业务错误码
///
/// 按 HTTP 状态码分段：40xxx 对应 4xx，50xxx 对应 5xx。
/// 进响应体时以 `as i32` 写入信封的 code 字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400
    BadRequest = 40000,
    InvalidRole = 40001,
    WeakPassword = 40002,
    InvalidCourseStatus = 40003,
    StudentNotEnrolled = 40004,
    InvalidIdentifier = 40005,

    // 401
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403
    Forbidden = 40300,
    PermissionDenied = 40301,

    // 404
    NotFound = 40400,
    UserNotFound = 40401,
    StudentNotFound = 40402,
    TeacherNotFound = 40403,
    CourseNotFound = 40404,
    EnrollmentNotFound = 40405,
    CommentNotFound = 40406,

    // 409
    Conflict = 40900,
    EmailAlreadyExists = 40901,
    AlreadyEnrolled = 40902,

    // 500
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_segments() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 40902);
        assert_eq!(ErrorCode::PermissionDenied as i32, 40301);
    }
}
