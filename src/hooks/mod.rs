pub mod use_student_record;
pub mod use_students;
pub mod use_theme;
pub mod use_tutor;
