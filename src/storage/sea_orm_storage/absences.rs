//! 缺勤记录存储操作

use super::SeaOrmStorage;
use crate::entity::absences::{ActiveModel, Column, Entity as Absences, Relation};
use crate::entity::courses;
use crate::errors::{Result, SchoolSysError};
use crate::models::absences::{
    entities::{Absence, AbsenceWithCourse},
    requests::CreateAbsenceRequest,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

/// 缺勤 + 课程名称的打平查询行
#[derive(Debug, FromQueryResult)]
struct AbsenceCourseRow {
    id: Uuid,
    student_id: Uuid,
    course_id: Uuid,
    course_name: String,
    date: i64,
    reason: Option<String>,
}

impl SeaOrmStorage {
    /// 登记缺勤
    pub async fn create_absence_impl(&self, req: CreateAbsenceRequest) -> Result<Absence> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            date: Set(req.date.timestamp()),
            reason: Set(req.reason),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("登记缺勤失败: {e}")))?;

        Ok(result.into_absence())
    }

    /// 按学生列出缺勤
    pub async fn list_absences_by_student_impl(&self, student_id: Uuid) -> Result<Vec<Absence>> {
        let rows = Absences::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询缺勤失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_absence()).collect())
    }

    /// 按学生列出缺勤（附课程名，按日期倒序）
    pub async fn list_absences_with_course_by_student_impl(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<AbsenceWithCourse>> {
        let rows = Absences::find()
            .select_only()
            .columns([
                Column::Id,
                Column::StudentId,
                Column::CourseId,
                Column::Date,
                Column::Reason,
            ])
            .column_as(courses::Column::Name, "course_name")
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Date)
            .into_model::<AbsenceCourseRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询缺勤记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| AbsenceWithCourse {
                id: r.id,
                student_id: r.student_id,
                course_id: r.course_id,
                course_name: r.course_name,
                date: DateTime::<Utc>::from_timestamp(r.date, 0).unwrap_or_default(),
                reason: r.reason,
            })
            .collect())
    }

    /// 列出全部缺勤
    pub async fn list_all_absences_impl(&self) -> Result<Vec<Absence>> {
        let rows = Absences::find()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询缺勤失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_absence()).collect())
    }

    /// 列出某教师课程下的全部缺勤
    pub async fn list_absences_by_teacher_impl(&self, teacher_id: Uuid) -> Result<Vec<Absence>> {
        let rows = Absences::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(courses::Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询缺勤失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_absence()).collect())
    }
}
