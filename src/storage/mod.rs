use std::sync::Arc;

use uuid::Uuid;

use crate::models::{
    absences::{
        entities::{Absence, AbsenceWithCourse},
        requests::CreateAbsenceRequest,
    },
    comments::entities::{StudentWithCourse, TeacherComment, TeacherCommentWithDetails},
    courses::{
        entities::{Course, CourseStatus},
        requests::CreateCourseRequest,
    },
    enrollments::entities::Enrollment,
    grades::{
        entities::{Grade, GradeWithCourse},
        requests::CreateGradeRequest,
    },
    students::entities::{Student, StudentProfile},
    teachers::entities::{Teacher, TeacherProfile},
    users::entities::{User, UserRole},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户展示姓名
    async fn update_user_full_name(&self, id: Uuid, full_name: &str) -> Result<bool>;
    // 统计用户数（启动时判断是否需要初始化管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 学生档案方法
    // 为指定用户建立学生档案
    async fn create_student(&self, user_id: Uuid) -> Result<StudentProfile>;
    // 通过档案ID获取学生（含用户展示字段）
    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>>;
    // 通过用户ID获取学生档案（权限判定用）
    async fn get_student_profile_by_user_id(&self, user_id: Uuid) -> Result<Option<StudentProfile>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 删除学生档案
    async fn delete_student(&self, id: Uuid) -> Result<bool>;

    /// 教师档案方法
    // 为指定用户建立教师档案
    async fn create_teacher(&self, user_id: Uuid) -> Result<TeacherProfile>;
    // 通过档案ID获取教师（含用户展示字段）
    async fn get_teacher_by_id(&self, id: Uuid) -> Result<Option<Teacher>>;
    // 通过用户ID获取教师档案（权限判定用）
    async fn get_teacher_profile_by_user_id(&self, user_id: Uuid) -> Result<Option<TeacherProfile>>;
    // 列出全部教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 删除教师档案
    async fn delete_teacher(&self, id: Uuid) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: Uuid) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 列出某教师的课程
    async fn list_courses_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Course>>;
    // 更新课程状态
    async fn update_course_status(&self, course_id: Uuid, status: CourseStatus) -> Result<bool>;
    // 删除课程及其全部从属记录（成绩/缺勤/评语/选课），单事务提交
    async fn delete_course_with_dependents(&self, course_id: Uuid) -> Result<bool>;

    /// 选课方法
    // 学生选课；(student_id, course_id) 重复时返回 UniqueViolation
    async fn create_enrollment(&self, student_id: Uuid, course_id: Uuid) -> Result<Enrollment>;
    // 退课
    async fn delete_enrollment(&self, course_id: Uuid, student_id: Uuid) -> Result<bool>;
    // 查找学生在某教师任一课程下的选课记录（评语前置校验）
    async fn find_enrollment_for_teacher(
        &self,
        student_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Option<Enrollment>>;
    // 列出某课程的学生
    async fn list_course_students(&self, course_id: Uuid) -> Result<Vec<Student>>;
    // 列出某教师全部课程下的 (学生, 课程) 对，去重
    async fn list_teacher_students(&self, teacher_id: Uuid) -> Result<Vec<StudentWithCourse>>;

    /// 成绩方法（只增不改）
    // 录入成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 按学生列出成绩
    async fn list_grades_by_student(&self, student_id: Uuid) -> Result<Vec<Grade>>;
    // 按学生列出成绩（附课程名，按录入时间倒序）
    async fn list_grades_with_course_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<GradeWithCourse>>;
    // 列出全部成绩（管理员）
    async fn list_all_grades(&self) -> Result<Vec<Grade>>;
    // 列出某教师课程下的全部成绩
    async fn list_grades_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Grade>>;

    /// 缺勤方法（只增不改）
    // 登记缺勤
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence>;
    // 按学生列出缺勤
    async fn list_absences_by_student(&self, student_id: Uuid) -> Result<Vec<Absence>>;
    // 按学生列出缺勤（附课程名，按日期倒序）
    async fn list_absences_with_course_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<AbsenceWithCourse>>;
    // 列出全部缺勤（管理员）
    async fn list_all_absences(&self) -> Result<Vec<Absence>>;
    // 列出某教师课程下的全部缺勤
    async fn list_absences_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Absence>>;

    /// 教师评语方法
    // 创建评语
    async fn create_comment(
        &self,
        teacher_id: Uuid,
        student_id: Uuid,
        course_id: Uuid,
        comment: &str,
    ) -> Result<TeacherComment>;
    // 通过ID获取评语
    async fn get_comment_by_id(&self, id: Uuid) -> Result<Option<TeacherComment>>;
    // 删除评语
    async fn delete_comment(&self, id: Uuid) -> Result<bool>;
    // 按学生列出评语（附教师姓名与课程名，按时间倒序）
    async fn list_comments_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<TeacherCommentWithDetails>>;
    // 列出全部评语（管理员）
    async fn list_all_comments(&self) -> Result<Vec<TeacherComment>>;
    // 列出某教师撰写的评语
    async fn list_comments_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<TeacherComment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
