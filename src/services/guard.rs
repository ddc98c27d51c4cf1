//! 角色与归属权限断言
//!
//! 所有需要归属校验的端点共用同一个断言，避免每个端点各写一份
//! 相同逻辑而出现细微不一致。两层判定：
//!
//! 1. 角色门：调用者角色必须在端点允许的角色集合内；
//! 2. 归属门：资源的归属外键必须与调用者的档案行一致
//!    （管理员始终通过归属门）。
//!
//! 三种失败语义严格区分：身份缺失 -> 401，角色/归属不符 -> 403，
//! 资源不存在 -> 404（由处理程序在查询后给出）。

use actix_web::HttpResponse;
use uuid::Uuid;

use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::context::CallerContext;

/// 归属判定规则
#[derive(Debug, Clone, Copy)]
pub enum OwnershipRule {
    /// 只做角色门
    Any,
    /// 调用者必须是该课程的授课教师（参数为 course.teacher_id）
    CourseTeacher(Uuid),
    /// 学生只能访问自己的记录（参数为目标 student_id）；教师与管理员不受限
    StudentSelf(Uuid),
    /// 调用者必须是评语作者（参数为 comment.teacher_id）
    CommentAuthor(Uuid),
}

/// 权限断言失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDenial {
    /// 角色或归属不符
    Forbidden,
}

impl GuardDenial {
    pub fn into_response(self, message: &str) -> HttpResponse {
        match self {
            GuardDenial::Forbidden => HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                message,
            )),
        }
    }
}

/// 统一权限断言
pub fn authorize(
    caller: &CallerContext,
    allowed_roles: &[&UserRole],
    rule: OwnershipRule,
) -> Result<(), GuardDenial> {
    // 第一层：角色门
    if !allowed_roles.iter().any(|role| **role == caller.user.role) {
        return Err(GuardDenial::Forbidden);
    }

    // 第二层：归属门，管理员直接通过
    if caller.user.role == UserRole::Admin {
        return Ok(());
    }

    match rule {
        OwnershipRule::Any => Ok(()),
        OwnershipRule::CourseTeacher(owner_id) | OwnershipRule::CommentAuthor(owner_id) => {
            match &caller.teacher {
                Some(teacher) if teacher.id == owner_id => Ok(()),
                _ => Err(GuardDenial::Forbidden),
            }
        }
        OwnershipRule::StudentSelf(target_id) => {
            if caller.user.role != UserRole::Student {
                // 教师查看学生记录不受归属门限制
                return Ok(());
            }
            match &caller.student {
                Some(student) if student.id == target_id => Ok(()),
                _ => Err(GuardDenial::Forbidden),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::StudentProfile;
    use crate::models::teachers::entities::TeacherProfile;
    use crate::models::users::entities::User;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: format!("{role}@school.edu"),
            password_hash: String::new(),
            full_name: "测试账号".into(),
            role,
            created_at: chrono::Utc::now(),
        }
    }

    fn teacher_caller() -> (CallerContext, Uuid) {
        let user = user_with_role(UserRole::Teacher);
        let teacher_id = Uuid::new_v4();
        let ctx = CallerContext {
            teacher: Some(TeacherProfile {
                id: teacher_id,
                user_id: user.id,
                hired_at: chrono::Utc::now(),
            }),
            student: None,
            user,
        };
        (ctx, teacher_id)
    }

    fn student_caller() -> (CallerContext, Uuid) {
        let user = user_with_role(UserRole::Student);
        let student_id = Uuid::new_v4();
        let ctx = CallerContext {
            teacher: None,
            student: Some(StudentProfile {
                id: student_id,
                user_id: user.id,
                enrolled_at: chrono::Utc::now(),
            }),
            user,
        };
        (ctx, student_id)
    }

    fn admin_caller() -> CallerContext {
        CallerContext {
            user: user_with_role(UserRole::Admin),
            teacher: None,
            student: None,
        }
    }

    #[test]
    fn test_role_gate_rejects_missing_role() {
        let (student, _) = student_caller();
        let denied = authorize(&student, UserRole::teacher_roles(), OwnershipRule::Any);
        assert_eq!(denied, Err(GuardDenial::Forbidden));
    }

    #[test]
    fn test_owning_teacher_passes_course_gate() {
        let (teacher, teacher_id) = teacher_caller();
        assert!(
            authorize(
                &teacher,
                UserRole::teacher_roles(),
                OwnershipRule::CourseTeacher(teacher_id),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_other_teacher_fails_course_gate() {
        let (teacher_a, _) = teacher_caller();
        let other_course_owner = Uuid::new_v4();
        let denied = authorize(
            &teacher_a,
            UserRole::teacher_roles(),
            OwnershipRule::CourseTeacher(other_course_owner),
        );
        assert_eq!(denied, Err(GuardDenial::Forbidden));
    }

    #[test]
    fn test_admin_bypasses_ownership() {
        let admin = admin_caller();
        assert!(
            authorize(
                &admin,
                UserRole::staff_roles(),
                OwnershipRule::CourseTeacher(Uuid::new_v4()),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_student_reads_own_records() {
        let (student, student_id) = student_caller();
        assert!(
            authorize(
                &student,
                UserRole::all_roles(),
                OwnershipRule::StudentSelf(student_id),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_student_cannot_read_other_records() {
        // 无论目标学生是否存在，都只能得到 403
        let (student, _) = student_caller();
        let denied = authorize(
            &student,
            UserRole::all_roles(),
            OwnershipRule::StudentSelf(Uuid::new_v4()),
        );
        assert_eq!(denied, Err(GuardDenial::Forbidden));
    }

    #[test]
    fn test_teacher_not_limited_by_student_self_rule() {
        let (teacher, _) = teacher_caller();
        assert!(
            authorize(
                &teacher,
                UserRole::all_roles(),
                OwnershipRule::StudentSelf(Uuid::new_v4()),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_comment_author_gate() {
        let (teacher, teacher_id) = teacher_caller();
        assert!(
            authorize(
                &teacher,
                UserRole::teacher_roles(),
                OwnershipRule::CommentAuthor(teacher_id),
            )
            .is_ok()
        );
        assert_eq!(
            authorize(
                &teacher,
                UserRole::teacher_roles(),
                OwnershipRule::CommentAuthor(Uuid::new_v4()),
            ),
            Err(GuardDenial::Forbidden)
        );
    }

    #[test]
    fn test_teacher_without_profile_fails_ownership() {
        let ctx = CallerContext {
            user: user_with_role(UserRole::Teacher),
            teacher: None,
            student: None,
        };
        assert_eq!(
            authorize(
                &ctx,
                UserRole::teacher_roles(),
                OwnershipRule::CourseTeacher(Uuid::new_v4()),
            ),
            Err(GuardDenial::Forbidden)
        );
    }
}
