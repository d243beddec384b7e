use super::module::{Grade, Module};
use super::student::Student;

/// Display band for a module score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Satisfactory,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            ScoreBand::Excellent
        } else if score >= 0.6 {
            ScoreBand::Good
        } else if score >= 0.4 {
            ScoreBand::Satisfactory
        } else {
            ScoreBand::Poor
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "score-excellent",
            ScoreBand::Good => "score-good",
            ScoreBand::Satisfactory => "score-satisfactory",
            ScoreBand::Poor => "score-poor",
        }
    }
}

/// One row of the detail page's module table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleResult {
    pub module_id: u32,
    pub title: String,
    pub score: Option<f64>,
}

impl ModuleResult {
    pub fn band(&self) -> Option<ScoreBand> {
        self.score.map(ScoreBand::from_score)
    }

    pub fn css_class(&self) -> &'static str {
        self.band().map_or("score-ungraded", |b| b.css_class())
    }
}

/// A student joined with the module catalog and their grades.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student: Student,
    pub modules: Vec<Module>,
    pub grades: Vec<Grade>,
}

impl StudentRecord {
    pub fn new(student: Student, modules: Vec<Module>, grades: Vec<Grade>) -> Self {
        Self {
            student,
            modules,
            grades,
        }
    }

    /// First grade recorded for the module, if any
    pub fn grade_for(&self, module_id: u32) -> Option<f64> {
        self.grades
            .iter()
            .find(|g| g.module_id == module_id)
            .map(|g| g.score)
    }

    /// Every catalog module in catalog order, with the student's score when graded.
    pub fn module_results(&self) -> Vec<ModuleResult> {
        self.modules
            .iter()
            .map(|m| ModuleResult {
                module_id: m.id,
                title: m.title.clone(),
                score: self.grade_for(m.id),
            })
            .collect()
    }
}
