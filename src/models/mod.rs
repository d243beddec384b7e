pub mod cohort;
pub mod error;
pub mod format;
pub mod module;
pub mod student;
pub mod transcript;
pub mod tutor;
