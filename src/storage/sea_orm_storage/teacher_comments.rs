//! 教师评语存储操作

use super::SeaOrmStorage;
use crate::entity::teacher_comments::{
    ActiveModel, Column, Entity as TeacherComments, Relation,
};
use crate::entity::{courses, teachers, users};
use crate::errors::{Result, SchoolSysError};
use crate::models::comments::entities::{TeacherComment, TeacherCommentWithDetails};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

/// 评语 + 教师姓名与课程名称的打平查询行
#[derive(Debug, FromQueryResult)]
struct CommentDetailRow {
    id: Uuid,
    teacher_id: Uuid,
    student_id: Uuid,
    course_id: Uuid,
    comment: String,
    created_at: i64,
    teacher_name: String,
    course_name: String,
}

impl SeaOrmStorage {
    /// 创建评语
    pub async fn create_comment_impl(
        &self,
        teacher_id: Uuid,
        student_id: Uuid,
        course_id: Uuid,
        comment: &str,
    ) -> Result<TeacherComment> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            teacher_id: Set(teacher_id),
            student_id: Set(student_id),
            course_id: Set(course_id),
            comment: Set(comment.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("创建评语失败: {e}")))?;

        Ok(result.into_comment())
    }

    /// 通过 ID 获取评语
    pub async fn get_comment_by_id_impl(&self, id: Uuid) -> Result<Option<TeacherComment>> {
        let result = TeacherComments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询评语失败: {e}")))?;

        Ok(result.map(|m| m.into_comment()))
    }

    /// 删除评语
    pub async fn delete_comment_impl(&self, id: Uuid) -> Result<bool> {
        let result = TeacherComments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除评语失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按学生列出评语（附教师姓名与课程名，按时间倒序）
    pub async fn list_comments_for_student_impl(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<TeacherCommentWithDetails>> {
        let rows = TeacherComments::find()
            .select_only()
            .columns([
                Column::Id,
                Column::TeacherId,
                Column::StudentId,
                Column::CourseId,
                Column::Comment,
                Column::CreatedAt,
            ])
            .column_as(users::Column::FullName, "teacher_name")
            .column_as(courses::Column::Name, "course_name")
            .join(JoinType::InnerJoin, Relation::Teacher.def())
            .join(JoinType::InnerJoin, teachers::Relation::User.def())
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .into_model::<CommentDetailRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询评语列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| TeacherCommentWithDetails {
                id: r.id,
                teacher_id: r.teacher_id,
                student_id: r.student_id,
                course_id: r.course_id,
                comment: r.comment,
                created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).unwrap_or_default(),
                teacher_name: r.teacher_name,
                course_name: r.course_name,
            })
            .collect())
    }

    /// 列出全部评语
    pub async fn list_all_comments_impl(&self) -> Result<Vec<TeacherComment>> {
        let rows = TeacherComments::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询评语失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_comment()).collect())
    }

    /// 列出某教师撰写的评语
    pub async fn list_comments_by_teacher_impl(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<TeacherComment>> {
        let rows = TeacherComments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询评语失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_comment()).collect())
    }
}
