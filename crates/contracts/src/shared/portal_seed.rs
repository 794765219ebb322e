//! Демонстрационные данные портала.
//!
//! Курсы, вакансии, профиль компании и счётчики дашборда зашиты в
//! `portal_seed.json` и разбираются при старте приложения.

use crate::domain::a001_training_course::Course;
use crate::domain::a002_job_posting::Job;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

const EMBEDDED_SEED: &str = include_str!("portal_seed.json");

/// Профиль компании для шапки портала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub portal_title: String,
    pub name: String,
    pub contact_email: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            portal_title: "Cổng Doanh nghiệp".to_string(),
            name: String::new(),
            contact_email: String::new(),
        }
    }
}

/// Счётчики дашборда, не вычисляемые из данных.
///
/// Это заглушки демо-версии: число курсов считается по каталогу,
/// а эти три значения показываются как есть.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPlaceholders {
    pub active_postings: u32,
    pub interested_candidates: u32,
    pub hired: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSeed {
    pub company: CompanyProfile,
    pub dashboard: DashboardPlaceholders,
    pub courses: Vec<Course>,
    pub jobs: Vec<Job>,
}

impl PortalSeed {
    /// Разобрать встроенный набор данных
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_SEED).context("embedded portal_seed.json")
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let seed: PortalSeed = serde_json::from_str(raw).context("failed to parse portal seed")?;
        seed.validate()?;
        Ok(seed)
    }

    /// Курсы должны идти с id 1..=n, иначе нумерация новых курсов сломается
    fn validate(&self) -> anyhow::Result<()> {
        for (index, course) in self.courses.iter().enumerate() {
            let expected = index as u32 + 1;
            ensure!(
                course.id.0 == expected,
                "course '{}' has id {}, expected {}",
                course.name,
                course.id.0,
                expected
            );
            ensure!(
                course.registered_students <= course.max_students,
                "course '{}' is over capacity ({}/{})",
                course.name,
                course.registered_students,
                course.max_students
            );
        }
        Ok(())
    }
}
