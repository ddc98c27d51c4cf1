pub mod absences;
pub mod auth;
pub mod courses;
pub mod grades;
pub mod profiles;
pub mod students;
pub mod teacher_comments;
pub mod teachers;

pub use absences::configure_absences_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use grades::configure_grades_routes;
pub use profiles::configure_profiles_routes;
pub use students::configure_students_routes;
pub use teacher_comments::configure_teacher_comments_routes;
pub use teachers::configure_teachers_routes;
