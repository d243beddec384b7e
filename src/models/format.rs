use chrono::NaiveDate;

/// Marker shown for a module with no grade
pub const NOT_GRADED: &str = "Not graded";

/// Formats a [0, 1] grade as a percentage with one decimal, e.g. `0.85` -> `"85.0%"`
pub fn format_grade(grade: f64) -> String {
    format!("{:.1}%", grade * 100.0)
}

/// Formats `count` as a share of `total`, e.g. `(1, 2)` -> `"50.0%"`
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}

/// Formats an optional score, falling back to [`NOT_GRADED`]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| NOT_GRADED.to_string(), format_grade)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(0.85), "85.0%");
        assert_eq!(format_grade(0.8), "80.0%");
        assert_eq!(format_grade(0.0), "0.0%");
        assert_eq!(format_grade(1.0), "100.0%");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(1, 2), "50.0%");
        assert_eq!(format_percentage(1, 3), "33.3%");
        assert_eq!(format_percentage(0, 0), "0.0%");
    }

    #[test]
    fn test_format_score_marks_missing_grade() {
        assert_eq!(format_score(Some(0.88)), "88.0%");
        assert_eq!(format_score(None), "Not graded");
    }

    #[test]
    fn test_format_date() {
        let dob = NaiveDate::from_ymd_opt(2000, 2, 15).unwrap();
        assert_eq!(format_date(dob), "15/02/2000");
    }
}
