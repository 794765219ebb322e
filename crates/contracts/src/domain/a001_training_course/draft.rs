//! Черновик курса для формы создания.
//!
//! Каждое поле формы меняется своим сеттером и не затрагивает остальные.
//! Ошибок ввода нет: нечисловой текст в числовых полях превращается в 0,
//! пустые цели отбрасываются только при сохранении.

use serde::{Deserialize, Serialize};

/// Поле формы создания курса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseDraftField {
    Name,
    Organization,
    Location,
    StartDate,
    EndDate,
    TargetAudience,
    Fee,
    MaxStudents,
    Description,
    Instructor,
}

impl CourseDraftField {
    /// Числовые поля разбираются как целые числа
    pub fn is_numeric(&self) -> bool {
        matches!(self, CourseDraftField::Fee | CourseDraftField::MaxStudents)
    }
}

/// Несохранённое состояние формы курса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub target_audience: String,
    pub fee: u64,
    pub max_students: u32,
    pub description: String,
    pub instructor: String,
    /// Всегда содержит хотя бы одну (возможно пустую) строку
    pub objectives: Vec<String>,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self::blank()
    }
}

impl CourseDraft {
    /// Пустой черновик с одной пустой целью
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            organization: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            target_audience: String::new(),
            fee: 0,
            max_students: 0,
            description: String::new(),
            instructor: String::new(),
            objectives: vec![String::new()],
        }
    }

    /// Заменить ровно одно поле значением из поля ввода
    pub fn set_field(&mut self, field: CourseDraftField, raw: &str) {
        match field {
            CourseDraftField::Name => self.name = raw.to_string(),
            CourseDraftField::Organization => self.organization = raw.to_string(),
            CourseDraftField::Location => self.location = raw.to_string(),
            CourseDraftField::StartDate => self.start_date = raw.to_string(),
            CourseDraftField::EndDate => self.end_date = raw.to_string(),
            CourseDraftField::TargetAudience => self.target_audience = raw.to_string(),
            CourseDraftField::Fee => self.fee = parse_whole_number(raw),
            CourseDraftField::MaxStudents => {
                self.max_students = u32::try_from(parse_whole_number(raw)).unwrap_or(0)
            }
            CourseDraftField::Description => self.description = raw.to_string(),
            CourseDraftField::Instructor => self.instructor = raw.to_string(),
        }
    }

    /// Текущее значение поля в виде текста для привязки к input
    pub fn field_value(&self, field: CourseDraftField) -> String {
        match field {
            CourseDraftField::Name => self.name.clone(),
            CourseDraftField::Organization => self.organization.clone(),
            CourseDraftField::Location => self.location.clone(),
            CourseDraftField::StartDate => self.start_date.clone(),
            CourseDraftField::EndDate => self.end_date.clone(),
            CourseDraftField::TargetAudience => self.target_audience.clone(),
            CourseDraftField::Fee => self.fee.to_string(),
            CourseDraftField::MaxStudents => self.max_students.to_string(),
            CourseDraftField::Description => self.description.clone(),
            CourseDraftField::Instructor => self.instructor.clone(),
        }
    }

    /// Заменить цель по индексу; длина списка не меняется.
    /// Индекс за пределами списка игнорируется.
    pub fn set_objective(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.objectives.get_mut(index) {
            *slot = value.to_string();
        }
    }

    /// Кнопка "+" есть только у последней строки
    pub fn is_last_objective(&self, index: usize) -> bool {
        index + 1 == self.objectives.len()
    }

    /// Добавить пустую цель после последней строки.
    /// Возвращает false, если `index` не последний.
    pub fn append_objective_after(&mut self, index: usize) -> bool {
        if !self.is_last_objective(index) {
            return false;
        }
        self.objectives.push(String::new());
        true
    }

    /// Непустые цели в исходном порядке
    pub fn cleaned_objectives(&self) -> Vec<String> {
        self.objectives
            .iter()
            .filter(|o| !o.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Целая часть ведущего числа: "12.5" -> 12, "1e3" -> 1.
///
/// Отрицательные значения, текст без ведущих цифр и переполнение дают 0.
pub fn parse_whole_number(raw: &str) -> u64 {
    let trimmed = raw.trim();
    let unsigned = match trimmed.as_bytes().first() {
        Some(b'-') => return 0,
        Some(b'+') => &trimmed[1..],
        _ => trimmed,
    };
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    unsigned[..digits_len].parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_has_single_empty_objective() {
        let draft = CourseDraft::blank();
        assert_eq!(draft.objectives, vec![String::new()]);
        assert_eq!(draft, CourseDraft::default());
    }

    #[test]
    fn test_numeric_fields_degrade_to_zero() {
        let mut draft = CourseDraft::blank();
        draft.set_field(CourseDraftField::Fee, "abc");
        assert_eq!(draft.fee, 0);
        draft.set_field(CourseDraftField::Fee, "2000000");
        assert_eq!(draft.fee, 2_000_000);
        draft.set_field(CourseDraftField::MaxStudents, "abc");
        assert_eq!(draft.max_students, 0);
        draft.set_field(CourseDraftField::MaxStudents, " 30 ");
        assert_eq!(draft.max_students, 30);
        draft.set_field(CourseDraftField::MaxStudents, "-5");
        assert_eq!(draft.max_students, 0);
        draft.set_field(CourseDraftField::MaxStudents, "99999999999");
        assert_eq!(draft.max_students, 0);
        draft.set_field(CourseDraftField::Fee, "12.5");
        assert_eq!(draft.fee, 12);
        draft.set_field(CourseDraftField::MaxStudents, "30.0");
        assert_eq!(draft.max_students, 30);
        draft.set_field(CourseDraftField::Fee, "1e3");
        assert_eq!(draft.fee, 1);
        draft.set_field(CourseDraftField::Fee, "12abc");
        assert_eq!(draft.fee, 12);
        draft.set_field(CourseDraftField::Fee, "+7");
        assert_eq!(draft.fee, 7);
        draft.set_field(CourseDraftField::Fee, "-12.5");
        assert_eq!(draft.fee, 0);
        draft.set_field(CourseDraftField::Fee, ".5");
        assert_eq!(draft.fee, 0);
    }

    #[test]
    fn test_setter_touches_only_one_field() {
        let mut draft = CourseDraft::blank();
        draft.set_field(CourseDraftField::Name, "Kỹ năng mềm");
        draft.set_field(CourseDraftField::Fee, "500");
        let before = draft.clone();

        draft.set_field(CourseDraftField::Location, "Online");

        assert_eq!(draft.location, "Online");
        assert_eq!(draft.name, before.name);
        assert_eq!(draft.fee, before.fee);
        assert_eq!(draft.objectives, before.objectives);
        assert_eq!(draft.field_value(CourseDraftField::Fee), "500");
    }

    #[test]
    fn test_objective_edit_keeps_length() {
        let mut draft = CourseDraft::blank();
        assert!(draft.append_objective_after(0));
        draft.set_objective(1, "Agile");
        draft.set_objective(5, "ignored");
        assert_eq!(draft.objectives, vec!["".to_string(), "Agile".to_string()]);
    }

    #[test]
    fn test_append_only_from_last_row() {
        let mut draft = CourseDraft::blank();
        assert!(draft.append_objective_after(0));
        assert!(!draft.append_objective_after(0));
        assert_eq!(draft.objectives.len(), 2);
        assert!(draft.is_last_objective(1));
    }

    #[test]
    fn test_cleaned_objectives_drop_blank_and_keep_order() {
        let mut draft = CourseDraft::blank();
        draft.objectives = vec![
            "b".to_string(),
            "  ".to_string(),
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
        ];
        assert_eq!(draft.cleaned_objectives(), vec!["b", "a", "b"]);
    }
}
