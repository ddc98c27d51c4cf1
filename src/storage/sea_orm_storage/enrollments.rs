//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{
    ActiveModel, Column, Entity as Enrollments, Model as EnrollmentModel, Relation,
};
use crate::entity::{courses, students, users};
use crate::errors::{Result, SchoolSysError};
use crate::models::comments::entities::StudentWithCourse;
use crate::models::enrollments::entities::Enrollment;
use crate::models::students::entities::Student;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

fn into_enrollment(model: EnrollmentModel) -> Enrollment {
    Enrollment {
        id: model.id,
        student_id: model.student_id,
        course_id: model.course_id,
        enrolled_at: DateTime::<Utc>::from_timestamp(model.enrolled_at, 0).unwrap_or_default(),
    }
}

/// 学生 + 用户展示字段的打平查询行
#[derive(Debug, FromQueryResult)]
struct StudentRow {
    id: Uuid,
    user_id: Uuid,
    email: String,
    full_name: String,
    enrolled_at: i64,
}

impl StudentRow {
    fn into_student(self) -> Student {
        Student {
            id: self.id,
            user_id: self.user_id,
            email: self.email,
            full_name: self.full_name,
            enrolled_at: DateTime::<Utc>::from_timestamp(self.enrolled_at, 0).unwrap_or_default(),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct StudentCourseRow {
    student_id: Uuid,
    student_name: String,
    course_id: Uuid,
    course_name: String,
}

impl SeaOrmStorage {
    /// 学生选课
    ///
    /// (student_id, course_id) 的唯一索引保证并发重复选课只有一次成功，
    /// 其余以 UniqueViolation 返回。
    pub async fn create_enrollment_impl(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(SchoolSysError::from)?;

        Ok(into_enrollment(result))
    }

    /// 退课
    pub async fn delete_enrollment_impl(&self, course_id: Uuid, student_id: Uuid) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查找学生在某教师任一课程下的选课记录
    pub async fn find_enrollment_for_teacher_impl(
        &self,
        student_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(Column::StudentId.eq(student_id))
            .filter(courses::Column::TeacherId.eq(teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(into_enrollment))
    }

    /// 列出某课程的学生
    pub async fn list_course_students_impl(&self, course_id: Uuid) -> Result<Vec<Student>> {
        let rows = Enrollments::find()
            .select_only()
            .column_as(students::Column::Id, "id")
            .column_as(students::Column::UserId, "user_id")
            .column_as(users::Column::Email, "email")
            .column_as(users::Column::FullName, "full_name")
            .column_as(students::Column::EnrolledAt, "enrolled_at")
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(Column::CourseId.eq(course_id))
            .into_model::<StudentRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课程学生失败: {e}")))?;

        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }

    /// 列出某教师全部课程下的 (学生, 课程) 对
    pub async fn list_teacher_students_impl(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<StudentWithCourse>> {
        let rows = Enrollments::find()
            .select_only()
            .column_as(students::Column::Id, "student_id")
            .column_as(users::Column::FullName, "student_name")
            .column_as(courses::Column::Id, "course_id")
            .column_as(courses::Column::Name, "course_name")
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(courses::Column::TeacherId.eq(teacher_id))
            .distinct()
            .into_model::<StudentCourseRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师学生失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| StudentWithCourse {
                student_id: r.student_id,
                student_name: r.student_name,
                course_id: r.course_id,
                course_name: r.course_name,
            })
            .collect())
    }
}
