pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::comments::requests::CreateTeacherCommentRequest;
use crate::storage::Storage;

pub struct CommentService {
    storage: Option<Arc<dyn Storage>>,
}

impl CommentService {
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

    // 评语列表（按角色过滤）
    pub async fn list_comments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_comments(self, request).await
    }

    // 创建评语，课程由选课记录推导
    pub async fn create_comment(
        &self,
        request: &HttpRequest,
        comment_data: CreateTeacherCommentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_comment(self, request, comment_data).await
    }

    // 删除评语（仅作者）
    pub async fn delete_comment(
        &self,
        request: &HttpRequest,
        comment_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        delete::delete_comment(self, request, comment_id).await
    }

    // 按学生查评语（附教师姓名与课程名）
    pub async fn comments_for_student(
        &self,
        request: &HttpRequest,
        student_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        list::comments_for_student(self, request, student_id).await
    }

    // 当前教师名下的 (学生, 课程) 列表
    pub async fn my_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_students(self, request).await
    }
}
