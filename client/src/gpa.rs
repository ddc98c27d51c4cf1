//! 按课程的平均分聚合
//!
//! 组合三个 API 调用：当前学生、该学生的成绩、全部课程，
//! 在客户端按课程分组求平均并按课程名排序。任何一步失败都
//! 记日志后退化为空列表，不向界面层抛错。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::ApiClient;
use crate::dtos::{CourseDto, GradeDto, StudentDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGpa {
    pub course_id: String,
    pub course_name: String,
    pub average_grade: f64,
    pub grade_count: usize,
}

pub struct GpaService {
    api: ApiClient,
}

impl GpaService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 当前学生按课程的平均分，课程名升序
    pub async fn gpa_by_course(&self) -> Vec<CourseGpa> {
        let student = match self.api.get_json::<StudentDto>("/api/students/me").await {
            Ok(student) => student,
            Err(e) => {
                warn!("GPA aggregation: failed to fetch current student: {}", e);
                return Vec::new();
            }
        };

        let grades = match self
            .api
            .get_json::<Vec<GradeDto>>(&format!("/api/grades/by-student/{}", student.id))
            .await
        {
            Ok(grades) => grades,
            Err(e) => {
                warn!("GPA aggregation: failed to fetch grades: {}", e);
                return Vec::new();
            }
        };

        if grades.is_empty() {
            return Vec::new();
        }

        let courses = match self.api.get_json::<Vec<CourseDto>>("/api/courses").await {
            Ok(courses) => courses,
            Err(e) => {
                warn!("GPA aggregation: failed to fetch courses: {}", e);
                return Vec::new();
            }
        };

        aggregate_by_course(&grades, &courses)
    }
}

/// 纯聚合：按课程分组求算术平均（保留两位小数），按课程名排序
pub fn aggregate_by_course(grades: &[GradeDto], courses: &[CourseDto]) -> Vec<CourseGpa> {
    let course_names: HashMap<&str, &str> = courses
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut grouped: HashMap<&str, (f64, usize)> = HashMap::new();
    for grade in grades {
        let entry = grouped.entry(grade.course_id.as_str()).or_insert((0.0, 0));
        entry.0 += grade.value;
        entry.1 += 1;
    }

    let mut result: Vec<CourseGpa> = grouped
        .into_iter()
        .map(|(course_id, (sum, count))| CourseGpa {
            course_id: course_id.to_string(),
            course_name: course_names
                .get(course_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Course {course_id}")),
            average_grade: round2(sum / count as f64),
            grade_count: count,
        })
        .collect();

    result.sort_by(|a, b| a.course_name.cmp(&b.course_name));
    result
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(course_id: &str, value: f64) -> GradeDto {
        GradeDto {
            id: format!("grade-{course_id}-{value}"),
            student_id: "student-1".into(),
            course_id: course_id.into(),
            value,
            given_at: chrono::Utc::now(),
        }
    }

    fn course(id: &str, name: &str) -> CourseDto {
        CourseDto {
            id: id.into(),
            name: name.into(),
            description: None,
            status: "in_progress".into(),
            teacher_id: "teacher-1".into(),
            teacher_name: "王老师".into(),
        }
    }

    #[test]
    fn test_average_per_course_sorted_by_name() {
        let grades = vec![grade("a", 70.0), grade("a", 90.0), grade("b", 100.0)];
        let courses = vec![course("b", "Biology"), course("a", "Algebra")];

        let result = aggregate_by_course(&grades, &courses);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].course_name, "Algebra");
        assert_eq!(result[0].average_grade, 80.0);
        assert_eq!(result[0].grade_count, 2);
        assert_eq!(result[1].course_name, "Biology");
        assert_eq!(result[1].average_grade, 100.0);
        assert_eq!(result[1].grade_count, 1);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let grades = vec![grade("a", 70.0), grade("a", 90.0), grade("a", 85.0)];
        let courses = vec![course("a", "Algebra")];

        let result = aggregate_by_course(&grades, &courses);
        // 245 / 3 = 81.666...
        assert_eq!(result[0].average_grade, 81.67);
    }

    #[test]
    fn test_unknown_course_gets_fallback_label() {
        let grades = vec![grade("ghost", 60.0)];
        let result = aggregate_by_course(&grades, &[]);
        assert_eq!(result[0].course_name, "Course ghost");
    }

    #[test]
    fn test_empty_grades_empty_result() {
        assert!(aggregate_by_course(&[], &[course("a", "Algebra")]).is_empty());
    }
}
