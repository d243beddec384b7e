use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Academic outcome label assigned to a student by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Distinction,
    Merit,
    Pass,
    Fail,
}

impl Classification {
    /// Returns the label exactly as the API spells it
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Distinction => "Distinction",
            Classification::Merit => "Merit",
            Classification::Pass => "Pass",
            Classification::Fail => "Fail",
        }
    }

    /// Returns the lower-case value used by the list filter
    pub fn value(&self) -> &'static str {
        match self {
            Classification::Distinction => "distinction",
            Classification::Merit => "merit",
            Classification::Pass => "pass",
            Classification::Fail => "fail",
        }
    }

    /// Returns CSS class name for the badge color
    pub fn css_class(&self) -> &'static str {
        match self {
            Classification::Distinction => "badge-distinction",
            Classification::Merit => "badge-merit",
            Classification::Pass => "badge-pass",
            Classification::Fail => "badge-fail",
        }
    }

    /// Returns color for chart display (hex code)
    pub fn color(&self) -> &'static str {
        match self {
            Classification::Distinction => "#059669", // green
            Classification::Merit => "#2563eb",       // blue
            Classification::Pass => "#d97706",        // amber
            Classification::Fail => "#dc2626",        // red
        }
    }

    /// All classifications, best first.
    pub fn all() -> &'static [Classification] {
        &[
            Classification::Distinction,
            Classification::Merit,
            Classification::Pass,
            Classification::Fail,
        ]
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Classification {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distinction" => Ok(Classification::Distinction),
            "merit" => Ok(Classification::Merit),
            "pass" => Ok(Classification::Pass),
            "fail" => Ok(Classification::Fail),
            _ => Err(AppError::Api(format!("Unknown classification: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub personal_tutor_id: u32,
    /// Mean of the student's module scores, in [0, 1]
    pub average_grade: f64,
    /// Label as sent by the API; see [`Student::classification`]
    pub classification: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Parses the classification label, ignoring case.
    /// Returns `None` for labels outside the four known outcomes.
    pub fn classification(&self) -> Option<Classification> {
        self.classification.parse().ok()
    }
}
