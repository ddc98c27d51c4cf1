pub mod context;
pub mod guard;

pub mod absences;
pub mod auth;
pub mod comments;
pub mod courses;
pub mod grades;
pub mod students;
pub mod teachers;

pub use absences::AbsenceService;
pub use auth::AuthService;
pub use comments::CommentService;
pub use context::CallerContext;
pub use courses::CourseService;
pub use grades::GradeService;
pub use students::StudentService;
pub use teachers::TeacherService;
