use super::error::AppError;
use super::student::{Classification, Student};

/// The fetched list of students, in the order the API returned them.
#[derive(Clone, Debug, PartialEq)]
pub struct Cohort {
    students: Vec<Student>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CohortStats {
    pub total: usize,
    pub distinction: usize,
    pub merit: usize,
    pub pass: usize,
    pub fail: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl CohortStats {
    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Distinction => self.distinction,
            Classification::Merit => self.merit,
            Classification::Pass => self.pass,
            Classification::Fail => self.fail,
        }
    }
}

/// Selection in the student list's classification dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassificationFilter {
    #[default]
    All,
    Only(Classification),
}

impl ClassificationFilter {
    /// Value of the `<option>` element
    pub fn value(&self) -> &'static str {
        match self {
            ClassificationFilter::All => "all",
            ClassificationFilter::Only(c) => c.value(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassificationFilter::All => "All Classifications",
            ClassificationFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            ClassificationFilter::All => true,
            ClassificationFilter::Only(c) => student.classification() == Some(*c),
        }
    }

    /// Dropdown options in display order.
    pub fn options() -> Vec<ClassificationFilter> {
        std::iter::once(ClassificationFilter::All)
            .chain(Classification::all().iter().copied().map(ClassificationFilter::Only))
            .collect()
    }
}

impl std::str::FromStr for ClassificationFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ClassificationFilter::All);
        }
        s.parse::<Classification>()
            .map(ClassificationFilter::Only)
            .map_err(|_| AppError::Config(format!("Invalid classification filter: {s}")))
    }
}

impl Cohort {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Aggregate statistics, or `None` when there are no students.
    ///
    /// Classification labels are compared ignoring case. Students with a
    /// label outside the four known outcomes only count towards `total`.
    pub fn stats(&self) -> Option<CohortStats> {
        if self.students.is_empty() {
            return None;
        }

        let total = self.students.len();
        let count = |c: Classification| {
            self.students
                .iter()
                .filter(|s| s.classification() == Some(c))
                .count()
        };

        let grades = self.students.iter().map(|s| s.average_grade);
        let highest = grades.clone().fold(f64::NEG_INFINITY, f64::max);
        let lowest = grades.clone().fold(f64::INFINITY, f64::min);
        let average = grades.sum::<f64>() / total as f64;

        Some(CohortStats {
            total,
            distinction: count(Classification::Distinction),
            merit: count(Classification::Merit),
            pass: count(Classification::Pass),
            fail: count(Classification::Fail),
            average,
            highest,
            lowest,
        })
    }

    /// Students matching the filter, in their original order.
    pub fn filter(&self, filter: ClassificationFilter) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Labels and counts for the classification chart
    pub fn series_data(&self) -> Result<(Vec<String>, Vec<usize>), AppError> {
        let stats = self
            .stats()
            .ok_or_else(|| AppError::Api("No student data available".to_string()))?;

        Ok(Classification::all()
            .iter()
            .map(|c| (c.label().to_string(), stats.count(*c)))
            .unzip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        assert_eq!(
            "all".parse::<ClassificationFilter>().unwrap(),
            ClassificationFilter::All
        );
        assert_eq!(
            "merit".parse::<ClassificationFilter>().unwrap(),
            ClassificationFilter::Only(Classification::Merit)
        );
        assert!("everything".parse::<ClassificationFilter>().is_err());
    }

    #[test]
    fn test_filter_options_round_trip_through_value() {
        for option in ClassificationFilter::options() {
            assert_eq!(option.value().parse::<ClassificationFilter>().unwrap(), option);
        }
        assert_eq!(ClassificationFilter::options().len(), 5);
    }

    #[test]
    fn test_empty_cohort_has_no_stats() {
        let cohort = Cohort::new(vec![]);
        assert!(cohort.stats().is_none());
        assert!(cohort.series_data().is_err());
    }
}
