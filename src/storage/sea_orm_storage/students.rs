//! 学生档案存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::entity::users::Model as UserModel;
use crate::errors::{Result, SchoolSysError};
use crate::models::students::entities::{Student, StudentProfile};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

fn into_profile(model: StudentModel) -> StudentProfile {
    StudentProfile {
        id: model.id,
        user_id: model.user_id,
        enrolled_at: DateTime::<Utc>::from_timestamp(model.enrolled_at, 0).unwrap_or_default(),
    }
}

fn into_student(model: StudentModel, user: UserModel) -> Student {
    Student {
        id: model.id,
        user_id: model.user_id,
        email: user.email,
        full_name: user.full_name,
        enrolled_at: DateTime::<Utc>::from_timestamp(model.enrolled_at, 0).unwrap_or_default(),
    }
}

impl SeaOrmStorage {
    /// 建立学生档案
    pub async fn create_student_impl(&self, user_id: Uuid) -> Result<StudentProfile> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(SchoolSysError::from)?;

        Ok(into_profile(result))
    }

    /// 通过档案 ID 获取学生（含用户展示字段）
    pub async fn get_student_by_id_impl(&self, id: Uuid) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .find_also_related(crate::entity::prelude::Users)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.and_then(|(s, u)| u.map(|u| into_student(s, u))))
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_profile_by_user_id_impl(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StudentProfile>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(into_profile))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let rows = Students::find()
            .find_also_related(crate::entity::prelude::Users)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(s, u)| u.map(|u| into_student(s, u)))
            .collect())
    }

    /// 删除学生档案
    pub async fn delete_student_impl(&self, id: Uuid) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
