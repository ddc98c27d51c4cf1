//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Relation};
use crate::entity::{absences, enrollments, grades, teacher_comments, teachers, users};
use crate::errors::{Result, SchoolSysError};
use crate::models::courses::{
    entities::{Course, CourseStatus},
    requests::CreateCourseRequest,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

/// 课程 + 授课教师姓名的打平查询行
#[derive(Debug, FromQueryResult)]
struct CourseRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    status: String,
    teacher_id: Uuid,
    teacher_name: String,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self
                .status
                .parse::<CourseStatus>()
                .unwrap_or(CourseStatus::NotStarted),
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
        }
    }
}

fn course_with_teacher() -> sea_orm::Select<Courses> {
    Courses::find()
        .select_only()
        .columns([
            Column::Id,
            Column::Name,
            Column::Description,
            Column::Status,
            Column::TeacherId,
        ])
        .column_as(users::Column::FullName, "teacher_name")
        .join(JoinType::InnerJoin, Relation::Teacher.def())
        .join(JoinType::InnerJoin, teachers::Relation::User.def())
}

impl SeaOrmStorage {
    /// 创建课程，初始状态为未开课
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let course_id = Uuid::new_v4();

        let model = ActiveModel {
            id: Set(course_id),
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            description: Set(req.description),
            status: Set(CourseStatus::NotStarted.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("创建课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id)
            .await?
            .ok_or_else(|| SchoolSysError::database_operation("课程创建后查询失败"))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: Uuid) -> Result<Option<Course>> {
        let result = course_with_teacher()
            .filter(Column::Id.eq(course_id))
            .into_model::<CourseRow>()
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(CourseRow::into_course))
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let rows = course_with_teacher()
            .order_by_asc(Column::Name)
            .into_model::<CourseRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    /// 列出某教师的课程
    pub async fn list_courses_by_teacher_impl(&self, teacher_id: Uuid) -> Result<Vec<Course>> {
        let rows = course_with_teacher()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Name)
            .into_model::<CourseRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    /// 更新课程状态
    pub async fn update_course_status_impl(
        &self,
        course_id: Uuid,
        status: CourseStatus,
    ) -> Result<bool> {
        let result = Courses::update_many()
            .col_expr(Column::Status, Expr::value(status.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("更新课程状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除课程及全部从属记录
    ///
    /// 成绩、缺勤、评语、选课与课程本体在同一事务内删除，
    /// 任一步失败则整体回滚，不会留下半删状态。
    pub async fn delete_course_with_dependents_impl(&self, course_id: Uuid) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("开启事务失败: {e}")))?;

        grades::Entity::delete_many()
            .filter(grades::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课程成绩失败: {e}")))?;

        absences::Entity::delete_many()
            .filter(absences::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课程缺勤失败: {e}")))?;

        teacher_comments::Entity::delete_many()
            .filter(teacher_comments::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课程评语失败: {e}")))?;

        enrollments::Entity::delete_many()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课程选课失败: {e}")))?;

        let result = Courses::delete_by_id(course_id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
