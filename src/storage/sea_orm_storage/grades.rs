//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::courses;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Relation};
use crate::errors::{Result, SchoolSysError};
use crate::models::grades::{
    entities::{Grade, GradeWithCourse},
    requests::CreateGradeRequest,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

/// 成绩 + 课程名称的打平查询行
#[derive(Debug, FromQueryResult)]
struct GradeCourseRow {
    id: Uuid,
    student_id: Uuid,
    course_id: Uuid,
    course_name: String,
    value: f64,
    given_at: i64,
}

impl SeaOrmStorage {
    /// 录入成绩，录入时间由服务端生成
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            value: Set(req.value),
            given_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 按学生列出成绩
    pub async fn list_grades_by_student_impl(&self, student_id: Uuid) -> Result<Vec<Grade>> {
        let rows = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 按学生列出成绩（附课程名，按录入时间倒序）
    pub async fn list_grades_with_course_by_student_impl(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<GradeWithCourse>> {
        let rows = Grades::find()
            .select_only()
            .columns([
                Column::Id,
                Column::StudentId,
                Column::CourseId,
                Column::Value,
                Column::GivenAt,
            ])
            .column_as(courses::Column::Name, "course_name")
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::GivenAt)
            .into_model::<GradeCourseRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询成绩单失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| GradeWithCourse {
                id: r.id,
                student_id: r.student_id,
                course_id: r.course_id,
                course_name: r.course_name,
                value: r.value,
                given_at: DateTime::<Utc>::from_timestamp(r.given_at, 0).unwrap_or_default(),
            })
            .collect())
    }

    /// 列出全部成绩
    pub async fn list_all_grades_impl(&self) -> Result<Vec<Grade>> {
        let rows = Grades::find()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 列出某教师课程下的全部成绩
    pub async fn list_grades_by_teacher_impl(&self, teacher_id: Uuid) -> Result<Vec<Grade>> {
        let rows = Grades::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(courses::Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }
}
