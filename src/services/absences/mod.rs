pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::absences::requests::CreateAbsenceRequest;
use crate::storage::Storage;

pub struct AbsenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AbsenceService {
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

    // 登记缺勤
    pub async fn create_absence(
        &self,
        request: &HttpRequest,
        absence_data: CreateAbsenceRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_absence(self, request, absence_data).await
    }

    // 缺勤列表（按角色过滤）
    pub async fn list_absences(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_absences(self, request).await
    }

    // 按学生查缺勤
    pub async fn absences_by_student(
        &self,
        request: &HttpRequest,
        student_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        list::absences_by_student(self, request, student_id).await
    }

    // 按学生查缺勤（附课程名）
    pub async fn absences_with_course(
        &self,
        request: &HttpRequest,
        student_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        list::absences_with_course(self, request, student_id).await
    }
}
