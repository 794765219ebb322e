//! Поиск и фильтрация курсов.
//!
//! Фильтр стабилен: результат есть подпоследовательность исходного списка
//! в исходном порядке.

use super::aggregate::Course;
use crate::enums::CourseStatus;

/// Значение фильтра "все статусы"
pub const STATUS_FILTER_ALL: &str = "all";

/// Фильтр по статусу, как он приходит из выпадающего списка
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CourseStatus),
    /// Неизвестный код: не совпадает ни с одним курсом
    Unrecognized(String),
}

impl StatusFilter {
    pub fn from_code(code: &str) -> Self {
        if code == STATUS_FILTER_ALL {
            return StatusFilter::All;
        }
        match CourseStatus::from_code(code) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::Unrecognized(code.to_string()),
        }
    }

    pub fn code(&self) -> String {
        match self {
            StatusFilter::All => STATUS_FILTER_ALL.to_string(),
            StatusFilter::Only(status) => status.code().to_string(),
            StatusFilter::Unrecognized(code) => code.clone(),
        }
    }

    pub fn matches(&self, status: CourseStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }

    /// Варианты для выпадающего списка: (код, подпись)
    pub fn options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![(STATUS_FILTER_ALL, "Tất cả trạng thái")];
        options.extend(
            CourseStatus::all()
                .into_iter()
                .map(|s| (s.code(), s.display_name())),
        );
        options
    }
}

/// Текущие параметры поиска в списке курсов
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl CourseFilter {
    pub fn new(query: impl Into<String>, status_code: &str) -> Self {
        Self {
            query: query.into(),
            status: StatusFilter::from_code(status_code),
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        course.matches_query(&self.query.to_lowercase()) && self.status.matches(course.status)
    }

    /// Отфильтровать курсы, сохраняя исходный порядок
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Отфильтровать курсы по строке поиска и коду статуса
pub fn filter_courses(courses: &[Course], query: &str, status_code: &str) -> Vec<Course> {
    CourseFilter::new(query, status_code)
        .apply(courses)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_training_course::aggregate::CourseId;
    use crate::domain::a001_training_course::draft::CourseDraft;

    fn course(id: u32, name: &str, org: &str, status: CourseStatus) -> Course {
        let mut draft = CourseDraft::blank();
        draft.name = name.to_string();
        draft.organization = org.to_string();
        let mut c = Course::from_draft(CourseId(id), &draft);
        c.status = status;
        c
    }

    fn sample() -> Vec<Course> {
        vec![
            course(1, "Kỹ năng phần mềm", "Hưng Yên", CourseStatus::Recruiting),
            course(2, "Quản lý dự án", "Hà Nội", CourseStatus::Recruiting),
            course(3, "An toàn lao động", "Quản lý KCN", CourseStatus::Ongoing),
            course(4, "Excel nâng cao", "Online Academy", CourseStatus::Completed),
        ]
    }

    fn ids(courses: &[Course]) -> Vec<u32> {
        courses.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_empty_query_and_all_returns_everything() {
        let all = sample();
        assert_eq!(filter_courses(&all, "", "all"), all);
    }

    #[test]
    fn test_query_matches_name_or_organization() {
        let all = sample();
        assert_eq!(ids(&filter_courses(&all, "quản lý", "all")), vec![2, 3]);
        assert_eq!(ids(&filter_courses(&all, "quản lý", "recruiting")), vec![2]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let all = sample();
        assert_eq!(ids(&filter_courses(&all, "QUẢN LÝ DỰ", "all")), vec![2]);
        assert_eq!(ids(&filter_courses(&all, "online ACADEMY", "all")), vec![4]);
        assert_eq!(ids(&filter_courses(&all, "hưng yên", "all")), vec![1]);
    }

    #[test]
    fn test_status_filter_exact_match() {
        let all = sample();
        assert_eq!(ids(&filter_courses(&all, "", "ongoing")), vec![3]);
        assert_eq!(ids(&filter_courses(&all, "", "completed")), vec![4]);
        assert!(filter_courses(&all, "", "Recruiting").is_empty());
        assert!(filter_courses(&all, "", "archived").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence_and_idempotent() {
        let all = sample();
        for (query, status) in [("", "all"), ("a", "all"), ("n", "recruiting"), ("x", "ongoing")] {
            let once = filter_courses(&all, query, status);
            let mut cursor = all.iter();
            for c in &once {
                assert!(cursor.any(|orig| orig == c), "not an ordered subsequence");
            }
            assert_eq!(filter_courses(&once, query, status), once);
        }
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(StatusFilter::from_code("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_code("ongoing"),
            StatusFilter::Only(CourseStatus::Ongoing)
        );
        assert_eq!(StatusFilter::from_code("nope").code(), "nope");
        assert_eq!(StatusFilter::options().len(), 4);
    }
}
