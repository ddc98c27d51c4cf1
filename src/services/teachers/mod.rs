pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod my_courses;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 教师列表
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request).await
    }

    // 创建教师（账号 + 档案）
    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, teacher_data).await
    }

    // 按档案 ID 获取教师
    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, teacher_id).await
    }

    // 更新教师展示姓名
    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: Uuid,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, teacher_id, update_data).await
    }

    // 删除教师档案
    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, teacher_id).await
    }

    // 当前教师的课程列表
    pub async fn my_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_courses::my_courses(self, request).await
    }

    // 当前教师某课程下的学生列表
    pub async fn my_course_students(
        &self,
        request: &HttpRequest,
        course_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        my_courses::my_course_students(self, request, course_id).await
    }
}
