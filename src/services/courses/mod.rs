pub mod comment;
pub mod create;
pub mod delete;
pub mod enroll;
pub mod get;
pub mod update_status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::courses::requests::{
    CreateCourseCommentRequest, CreateCourseRequest, EnrollmentRequest, UpdateCourseStatusRequest,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程列表
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::list_courses(self, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 当前教师的课程列表
    pub async fn my_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::my_courses(self, request).await
    }

    // 按 ID 获取课程
    pub async fn get_course(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    // 更新课程状态
    pub async fn update_course_status(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
        update_data: UpdateCourseStatusRequest,
    ) -> ActixResult<HttpResponse> {
        update_status::update_course_status(self, request, course_id, update_data).await
    }

    // 删除课程（手动级联，单事务）
    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }

    // 学生选课
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
        enrollment: EnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, course_id, enrollment).await
    }

    // 学生退课
    pub async fn unenroll(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
        student_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        enroll::unenroll(self, request, course_id, student_id).await
    }

    // 在课程下创建评语
    pub async fn create_comment(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
        comment_data: CreateCourseCommentRequest,
    ) -> ActixResult<HttpResponse> {
        comment::create_comment(self, request, course_id, comment_data).await
    }
}
