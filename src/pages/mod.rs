pub mod dashboard;
pub mod not_found;
pub mod student_detail;
pub mod student_list;
