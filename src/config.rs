/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the student records API, overridable at build time
    /// through `STUDENT_GRADES_API_URL`
    pub const API_BASE_URL: &'static str = match option_env!("STUDENT_GRADES_API_URL") {
        Some(url) => url,
        None => "http://127.0.0.1:8000",
    };

    /// Delay before re-rendering the chart after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
