use serde::{Deserialize, Serialize};

/// Подпись для неизвестного кода статуса
pub const UNKNOWN_STATUS_LABEL: &str = "Không xác định";

/// Визуальный тон бейджа статуса (общий для курсов и вакансий)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Brand,
    Warning,
    Success,
    Danger,
    Neutral,
}

impl StatusTone {
    /// CSS-модификатор бейджа
    pub fn css_modifier(&self) -> &'static str {
        match self {
            StatusTone::Brand => "badge--primary",
            StatusTone::Warning => "badge--warning",
            StatusTone::Success => "badge--success",
            StatusTone::Danger => "badge--error",
            StatusTone::Neutral => "badge--neutral",
        }
    }
}

/// Этап жизненного цикла учебного курса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Recruiting,
    Ongoing,
    Completed,
}

impl CourseStatus {
    /// Код статуса (совпадает с сериализованным значением)
    pub fn code(&self) -> &'static str {
        match self {
            CourseStatus::Recruiting => "recruiting",
            CourseStatus::Ongoing => "ongoing",
            CourseStatus::Completed => "completed",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseStatus::Recruiting => "Đang tuyển sinh",
            CourseStatus::Ongoing => "Đang diễn ra",
            CourseStatus::Completed => "Đã kết thúc",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            CourseStatus::Recruiting => StatusTone::Brand,
            CourseStatus::Ongoing => StatusTone::Warning,
            CourseStatus::Completed => StatusTone::Success,
        }
    }

    /// Все статусы в порядке жизненного цикла
    pub fn all() -> Vec<CourseStatus> {
        vec![
            CourseStatus::Recruiting,
            CourseStatus::Ongoing,
            CourseStatus::Completed,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "recruiting" => Some(CourseStatus::Recruiting),
            "ongoing" => Some(CourseStatus::Ongoing),
            "completed" => Some(CourseStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Подпись статуса курса по коду, с запасным значением для неизвестных кодов
pub fn course_status_label(code: &str) -> &'static str {
    CourseStatus::from_code(code)
        .map(|s| s.display_name())
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

/// Тон бейджа по коду статуса курса
pub fn course_status_tone(code: &str) -> StatusTone {
    CourseStatus::from_code(code)
        .map(|s| s.tone())
        .unwrap_or(StatusTone::Neutral)
}
