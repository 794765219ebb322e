use super::course_status::StatusTone;
use serde::{Deserialize, Serialize};

/// Статус вакансии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Expired,
    Closed,
}

impl JobStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Active => "Đang tuyển",
            JobStatus::Expired => "Hết hạn",
            JobStatus::Closed => "Đã đóng",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            JobStatus::Active => StatusTone::Success,
            JobStatus::Expired => StatusTone::Warning,
            JobStatus::Closed => StatusTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_labels() {
        assert_eq!(JobStatus::Active.display_name(), "Đang tuyển");
        assert_eq!(JobStatus::Closed.display_name(), "Đã đóng");
        assert!(serde_json::from_str::<JobStatus>("\"draft\"").is_err());
    }

    #[test]
    fn test_job_status_deserializes_from_code() {
        let status: JobStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, JobStatus::Expired);
        assert_eq!(status.tone(), StatusTone::Warning);
    }
}
