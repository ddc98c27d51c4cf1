//! 教师档案存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Model as TeacherModel};
use crate::entity::users::Model as UserModel;
use crate::errors::{Result, SchoolSysError};
use crate::models::teachers::entities::{Teacher, TeacherProfile};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

fn into_profile(model: TeacherModel) -> TeacherProfile {
    TeacherProfile {
        id: model.id,
        user_id: model.user_id,
        hired_at: DateTime::<Utc>::from_timestamp(model.hired_at, 0).unwrap_or_default(),
    }
}

fn into_teacher(model: TeacherModel, user: UserModel) -> Teacher {
    Teacher {
        id: model.id,
        user_id: model.user_id,
        email: user.email,
        full_name: user.full_name,
        hired_at: DateTime::<Utc>::from_timestamp(model.hired_at, 0).unwrap_or_default(),
    }
}

impl SeaOrmStorage {
    /// 建立教师档案
    pub async fn create_teacher_impl(&self, user_id: Uuid) -> Result<TeacherProfile> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            hired_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(SchoolSysError::from)?;

        Ok(into_profile(result))
    }

    /// 通过档案 ID 获取教师（含用户展示字段）
    pub async fn get_teacher_by_id_impl(&self, id: Uuid) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .find_also_related(crate::entity::prelude::Users)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.and_then(|(t, u)| u.map(|u| into_teacher(t, u))))
    }

    /// 通过用户 ID 获取教师档案
    pub async fn get_teacher_profile_by_user_id_impl(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TeacherProfile>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(into_profile))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let rows = Teachers::find()
            .find_also_related(crate::entity::prelude::Users)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(t, u)| u.map(|u| into_teacher(t, u)))
            .collect())
    }

    /// 删除教师档案
    pub async fn delete_teacher_impl(&self, id: Uuid) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
