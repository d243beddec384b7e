use crate::config::Config;
use crate::models::{
    cohort::Cohort,
    error::AppError,
    module::{Grade, Module},
    student::Student,
    transcript::StudentRecord,
    tutor::Tutor,
};
use futures::TryFutureExt;
use futures::future::try_join3;
use serde::de::DeserializeOwned;

// API CONFIGURATION
/// Configuration for the student records API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn students_url(&self) -> String {
        format!("{}/students/", self.base_url)
    }

    pub fn student_url(&self, student_id: &str) -> String {
        format!("{}/students/{student_id}/", self.base_url)
    }

    pub fn student_grades_url(&self, student_id: &str) -> String {
        format!("{}/students/{student_id}/grades/", self.base_url)
    }

    pub fn modules_url(&self) -> String {
        format!("{}/modules/", self.base_url)
    }

    pub fn module_url(&self, module_id: u32) -> String {
        format!("{}/modules/{module_id}/", self.base_url)
    }

    pub fn tutors_url(&self) -> String {
        format!("{}/tutors/", self.base_url)
    }

    pub fn tutor_url(&self, tutor_id: u32) -> String {
        format!("{}/tutors/{tutor_id}/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`. A trailing slash on the base URL is dropped.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// STUDENTS CLIENT
/// HTTP client for the student records API.
pub struct StudentsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StudentsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Creates a client around an already configured `reqwest::Client`.
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches every student, in the order the service returns them.
    pub async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        self.fetch(&self.config.students_url()).await
    }

    /// Fetches a single student. A missing student yields `AppError::NotFound`.
    pub async fn get_student(&self, student_id: &str) -> Result<Student, AppError> {
        self.fetch(&self.config.student_url(student_id)).await
    }

    /// Fetches the grades belonging to one student.
    pub async fn get_student_grades(&self, student_id: &str) -> Result<Vec<Grade>, AppError> {
        self.fetch(&self.config.student_grades_url(student_id))
            .await
    }

    pub async fn get_all_modules(&self) -> Result<Vec<Module>, AppError> {
        self.fetch(&self.config.modules_url()).await
    }

    pub async fn get_module(&self, module_id: u32) -> Result<Module, AppError> {
        self.fetch(&self.config.module_url(module_id)).await
    }

    pub async fn get_all_tutors(&self) -> Result<Vec<Tutor>, AppError> {
        self.fetch(&self.config.tutors_url()).await
    }

    pub async fn get_tutor(&self, tutor_id: u32) -> Result<Tutor, AppError> {
        self.fetch(&self.config.tutor_url(tutor_id)).await
    }

    /// Fetches the student, the module catalog and the student's grades
    /// concurrently. The first failure wins and the remaining requests are
    /// dropped.
    ///
    /// A 404 from the student or grades endpoint means the student does not
    /// exist and is reported as `AppError::StudentNotFound`.
    pub async fn fetch_student_record(&self, student_id: &str) -> Result<StudentRecord, AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::StudentNotFound(student_id.to_string()),
            other => other,
        };

        let (student, modules, grades) = try_join3(
            self.get_student(student_id).map_err(not_found),
            self.get_all_modules(),
            self.get_student_grades(student_id).map_err(not_found),
        )
        .await?;

        Ok(StudentRecord::new(student, modules, grades))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Api(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Api(format!("Request error: {error}"))
        } else {
            AppError::Api(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::Api(format!("Client error {status}: {body}")),
            500..=599 => AppError::Api(format!("Server error {status}: {body}")),
            _ => AppError::Api(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches all students using default configuration.
pub async fn fetch_students() -> Result<Cohort, AppError> {
    let students = StudentsClient::new()?.get_all_students().await?;
    Ok(Cohort::new(students))
}

/// Fetches a student's detail record using default configuration.
pub async fn fetch_student_record(student_id: &str) -> Result<StudentRecord, AppError> {
    StudentsClient::new()?
        .fetch_student_record(student_id)
        .await
}

/// Fetches one tutor using default configuration.
pub async fn fetch_tutor(tutor_id: u32) -> Result<Tutor, AppError> {
    StudentsClient::new()?.get_tutor(tutor_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.base_url(),
            Config::API_BASE_URL.trim_end_matches('/')
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:9000/")
            .build();
        assert_eq!(config.students_url(), "http://localhost:9000/students/");
    }

    #[test]
    fn test_resource_urls() {
        let config = ApiConfig::builder().base_url("http://api.test").build();

        assert_eq!(config.student_url("ST001"), "http://api.test/students/ST001/");
        assert_eq!(
            config.student_grades_url("ST001"),
            "http://api.test/students/ST001/grades/"
        );
        assert_eq!(config.modules_url(), "http://api.test/modules/");
        assert_eq!(config.module_url(3), "http://api.test/modules/3/");
        assert_eq!(config.tutors_url(), "http://api.test/tutors/");
        assert_eq!(config.tutor_url(7), "http://api.test/tutors/7/");
    }

    #[test]
    fn test_error_for_status() {
        let client = StudentsClient::new().unwrap();

        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AppError::Api(msg) if msg.contains("Server error")
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::BAD_REQUEST, ""),
            AppError::Api(msg) if msg.contains("Client error")
        ));
    }

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::builder().base_url("http://api.test").build();
        let client = StudentsClient::with_config(config).unwrap();
        assert_eq!(client.config().base_url(), "http://api.test");
    }
}
