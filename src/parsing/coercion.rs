//! Приведение строковых ячеек к числовому виду

use crate::types::PrepError;

/// Фиксированный словарь категориальных значений, коды 1..10
pub const CATEGORICAL_MAP: [(&str, i64); 10] = [
    ("low", 1),
    ("med", 2),
    ("high", 3),
    ("vhigh", 4),
    ("small", 5),
    ("big", 6),
    ("unacc", 7),
    ("acc", 8),
    ("good", 9),
    ("vgood", 10),
];

/// Преобразование ячейки в f64. Никогда не завершается ошибкой:
/// все неразборчивые значения деградируют до 0.0
pub fn to_float(raw: &str) -> f64 {
    let value = raw.trim();

    if value.is_empty() || value == "?" {
        return 0.0; // Значение по умолчанию для пропущенных данных
    }

    // "50more" -> берем числовой префикс до "more"
    if value.contains("more") {
        let prefix = value.split("more").next().unwrap_or("").trim();
        return prefix.parse::<f64>().unwrap_or(0.0);
    }

    // Европейская десятичная запятая: "3,14" -> "3.14"
    if let Ok(parsed) = value.replace(',', ".").parse::<f64>() {
        return parsed;
    }

    let lowered = value.to_lowercase();
    for (token, code) in CATEGORICAL_MAP {
        if lowered == token {
            return code as f64;
        }
    }

    tracing::warn!("Unknown categorical value: '{}', falling back to 0.0", value);
    0.0
}

/// Строгое преобразование в целое число; в отличие от to_float
/// ошибка разбора поднимается к вызывающему коду
pub fn to_int(raw: &str) -> Result<i64, PrepError> {
    let value = raw.trim();
    value
        .parse::<i64>()
        .map_err(|_| PrepError::Conversion(value.to_string()))
}

/// Имена классов решения для кодов последнего столбца
pub fn decision_class_label(code: i64) -> Option<&'static str> {
    match code {
        7 => Some("unacc"),
        8 => Some("acc"),
        9 => Some("good"),
        10 => Some("vgood"),
        _ => None,
    }
}
