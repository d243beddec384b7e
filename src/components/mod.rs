pub mod chart;
pub mod classification_badge;
pub mod classification_breakdown;
pub mod filter_selector;
pub mod grade_distribution;
pub mod module_table;
pub mod nav_bar;
pub mod status;
pub mod student_info;
pub mod student_table;
pub mod summary;
pub mod theme_toggle;
pub mod tutor_card;

pub use nav_bar::NavBar;
pub use status::{ErrorAlert, Spinner};
