//! Утилиты форматирования чисел для списков и карточек

/// Разделитель разрядов в вьетнамской локали
pub const THOUSANDS_SEPARATOR: char = '.';

/// Подпись для бесплатного курса
pub const FREE_FEE_LABEL: &str = "Miễn phí";

/// Форматирует целое число с разделителем тысяч
///
/// # Примеры
///
/// ```rust,ignore
/// use frontend::shared::number_format::format_thousands;
/// assert_eq!(format_thousands(2000000), "2.000.000");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    // Вставляем разделитель каждые 3 цифры с конца
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Стоимость курса: "Miễn phí" для 0, иначе сумма в VND
pub fn format_fee(fee: u64) -> String {
    if fee == 0 {
        FREE_FEE_LABEL.to_string()
    } else {
        format!("{} VND", format_thousands(fee))
    }
}

/// Заполненность курса: "28/30 học viên"
pub fn format_enrollment(registered: u32, max: u32) -> String {
    format!("{}/{} học viên", registered, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(2000000), "2.000.000");
        assert_eq!(format_thousands(12345678), "12.345.678");
    }

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(0), "Miễn phí");
        assert_eq!(format_fee(2000000), "2.000.000 VND");
        assert_eq!(format_fee(500), "500 VND");
    }

    #[test]
    fn test_format_enrollment() {
        assert_eq!(format_enrollment(28, 30), "28/30 học viên");
    }
}
