//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod absences;
mod courses;
mod enrollments;
mod grades;
mod students;
mod teacher_comments;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSysError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // 选课唯一约束依赖外键与唯一索引生效
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User> {
        self.create_user_impl(email, password_hash, full_name, role)
            .await
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user_full_name(&self, id: Uuid, full_name: &str) -> Result<bool> {
        self.update_user_full_name_impl(id, full_name).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(&self, user_id: Uuid) -> Result<StudentProfile> {
        self.create_student_impl(user_id).await
    }

    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_profile_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_user_id_impl(user_id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn delete_student(&self, id: Uuid) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, user_id: Uuid) -> Result<TeacherProfile> {
        self.create_teacher_impl(user_id).await
    }

    async fn get_teacher_by_id(&self, id: Uuid) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_profile_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TeacherProfile>> {
        self.get_teacher_profile_by_user_id_impl(user_id).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn delete_teacher(&self, id: Uuid) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: Uuid) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn list_courses_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Course>> {
        self.list_courses_by_teacher_impl(teacher_id).await
    }

    async fn update_course_status(&self, course_id: Uuid, status: CourseStatus) -> Result<bool> {
        self.update_course_status_impl(course_id, status).await
    }

    async fn delete_course_with_dependents(&self, course_id: Uuid) -> Result<bool> {
        self.delete_course_with_dependents_impl(course_id).await
    }

    // 选课模块
    async fn create_enrollment(&self, student_id: Uuid, course_id: Uuid) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id).await
    }

    async fn delete_enrollment(&self, course_id: Uuid, student_id: Uuid) -> Result<bool> {
        self.delete_enrollment_impl(course_id, student_id).await
    }

    async fn find_enrollment_for_teacher(
        &self,
        student_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Option<Enrollment>> {
        self.find_enrollment_for_teacher_impl(student_id, teacher_id)
            .await
    }

    async fn list_course_students(&self, course_id: Uuid) -> Result<Vec<Student>> {
        self.list_course_students_impl(course_id).await
    }

    async fn list_teacher_students(&self, teacher_id: Uuid) -> Result<Vec<StudentWithCourse>> {
        self.list_teacher_students_impl(teacher_id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn list_grades_by_student(&self, student_id: Uuid) -> Result<Vec<Grade>> {
        self.list_grades_by_student_impl(student_id).await
    }

    async fn list_grades_with_course_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<GradeWithCourse>> {
        self.list_grades_with_course_by_student_impl(student_id)
            .await
    }

    async fn list_all_grades(&self) -> Result<Vec<Grade>> {
        self.list_all_grades_impl().await
    }

    async fn list_grades_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Grade>> {
        self.list_grades_by_teacher_impl(teacher_id).await
    }

    // 缺勤模块
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence> {
        self.create_absence_impl(absence).await
    }

    async fn list_absences_by_student(&self, student_id: Uuid) -> Result<Vec<Absence>> {
        self.list_absences_by_student_impl(student_id).await
    }

    async fn list_absences_with_course_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<AbsenceWithCourse>> {
        self.list_absences_with_course_by_student_impl(student_id)
            .await
    }

    async fn list_all_absences(&self) -> Result<Vec<Absence>> {
        self.list_all_absences_impl().await
    }

    async fn list_absences_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Absence>> {
        self.list_absences_by_teacher_impl(teacher_id).await
    }

    // 评语模块
    async fn create_comment(
        &self,
        teacher_id: Uuid,
        student_id: Uuid,
        course_id: Uuid,
        comment: &str,
    ) -> Result<TeacherComment> {
        self.create_comment_impl(teacher_id, student_id, course_id, comment)
            .await
    }

    async fn get_comment_by_id(&self, id: Uuid) -> Result<Option<TeacherComment>> {
        self.get_comment_by_id_impl(id).await
    }

    async fn delete_comment(&self, id: Uuid) -> Result<bool> {
        self.delete_comment_impl(id).await
    }

    async fn list_comments_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<TeacherCommentWithDetails>> {
        self.list_comments_for_student_impl(student_id).await
    }

    async fn list_all_comments(&self) -> Result<Vec<TeacherComment>> {
        self.list_all_comments_impl().await
    }

    async fn list_comments_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<TeacherComment>> {
        self.list_comments_by_teacher_impl(teacher_id).await
    }
}
