//! Page category constants.
//!
//! Every screen of the portal declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_training_course--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view or authoring form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Summary dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format
/// and that the category part is a known one.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_training_course--list"));
        assert!(is_valid_page_id("d400_portal_overview--dashboard"));
        assert!(!is_valid_page_id("a001_training_course"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_job_posting--wizard"));
    }

    #[test]
    fn test_aggregate_page_ids() {
        use contracts::domain::a001_training_course::Course;
        use contracts::domain::a002_job_posting::Job;
        use contracts::domain::common::AggregateRoot;

        let course_list = format!("{}--{}", Course::full_name(), PAGE_CAT_LIST);
        assert_eq!(course_list, "a001_training_course--list");
        assert!(is_valid_page_id(&course_list));
        assert!(is_valid_page_id(&format!("{}--{}", Job::full_name(), PAGE_CAT_LIST)));
    }
}
