use serde::{Deserialize, Serialize};

/// A course unit in the module catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub title: String,
    pub module_tutor_id: u32,
}

/// Score a student received on one module, in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub student_id: String,
    pub module_id: u32,
    pub score: f64,
}
