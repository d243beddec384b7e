//! Runs the real client against a throwaway HTTP responder on localhost.

use student_grades::hooks::use_student_record::{
    STUDENT_ERROR, STUDENT_NOT_FOUND, StudentRecordState,
};
use student_grades::hooks::use_students::{STUDENTS_ERROR, StudentsState};
use student_grades::models::{cohort::Cohort, error::AppError, format::format_score};
use student_grades::services::api::{ApiConfig, StudentsClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const STUDENTS: &str = r#"[
    {"student_id": "ST001", "first_name": "John", "last_name": "Doe", "dob": "2000-01-01",
     "personal_tutor_id": 1, "average_grade": 0.85, "classification": "Distinction"},
    {"student_id": "ST002", "first_name": "Jane", "last_name": "Smith", "dob": "2000-02-15",
     "personal_tutor_id": 2, "average_grade": 0.75, "classification": "Merit"}
]"#;

const STUDENT: &str = r#"{"student_id": "ST001", "first_name": "John", "last_name": "Doe",
    "dob": "2000-01-01", "personal_tutor_id": 1, "average_grade": 0.85,
    "classification": "Distinction"}"#;

const MODULES: &str = r#"[
    {"id": 1, "title": "Mathematics", "module_tutor_id": 1},
    {"id": 2, "title": "Physics", "module_tutor_id": 2}
]"#;

const GRADES: &str = r#"[{"student_id": "ST001", "module_id": 1, "score": 0.88}]"#;

const TUTORS: &str = r#"[
    {"id": 1, "first_name": "Charles", "last_name": "Xavier", "email": "xavier@school.edu", "title": "Dr."},
    {"id": 2, "first_name": "Jean", "last_name": "Grey", "email": "grey@school.edu", "title": null}
]"#;

const TUTOR: &str = r#"{"id": 1, "first_name": "Charles", "last_name": "Xavier",
    "email": "xavier@school.edu", "title": "Dr."}"#;

const NOT_FOUND: &str = r#"{"detail": "Not found"}"#;
const SERVER_ERROR: &str = r#"{"detail": "Internal Server Error"}"#;

type Routes = Vec<(&'static str, u16, &'static str)>;

/// Serves each `(path, status, body)` until the test runtime shuts down.
/// Unknown paths get a 404.
async fn serve(routes: Routes) -> StudentsClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map_or((404, NOT_FOUND), |(_, s, b)| (*s, *b));
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Internal Server Error",
                };

                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    let config = ApiConfig::builder().base_url(format!("http://{addr}")).build();
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    StudentsClient::with_http_client(config, http)
}

#[tokio::test]
async fn test_get_all_students_keeps_service_order() {
    let client = serve(vec![("/students/", 200, STUDENTS)]).await;

    let students = client.get_all_students().await.unwrap();
    let ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, vec!["ST001", "ST002"]);

    let state = StudentsState::from_result(Ok(Cohort::new(students)));
    let stats = state.data().unwrap().stats().unwrap();
    assert_eq!(stats.total, 2);
}

#[tokio::test]
async fn test_students_server_error_renders_generic_message() {
    let client = serve(vec![("/students/", 500, SERVER_ERROR)]).await;

    let result = client.get_all_students().await;
    assert!(matches!(&result, Err(AppError::Api(msg)) if msg.contains("500")));

    let state = StudentsState::from_result(result.map(Cohort::new));
    assert_eq!(state, StudentsState::Error(STUDENTS_ERROR.to_string()));
    assert!(state.data().is_none());
}

#[tokio::test]
async fn test_malformed_body_is_an_api_error() {
    let client = serve(vec![("/students/", 200, r#"{"not": "a list"}"#)]).await;

    let result = client.get_all_students().await;
    assert!(matches!(result, Err(AppError::Api(msg)) if msg.contains("parse")));
}

#[tokio::test]
async fn test_get_student_not_found() {
    let client = serve(vec![("/students/ST001/", 200, STUDENT)]).await;

    let student = client.get_student("ST001").await.unwrap();
    assert_eq!(student.full_name(), "John Doe");

    let missing = client.get_student("ST404").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_modules_and_tutors() {
    let client = serve(vec![
        ("/modules/", 200, MODULES),
        ("/modules/1/", 200, r#"{"id": 1, "title": "Mathematics", "module_tutor_id": 1}"#),
        ("/tutors/", 200, TUTORS),
        ("/tutors/1/", 200, TUTOR),
    ])
    .await;

    let modules = client.get_all_modules().await.unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(client.get_module(1).await.unwrap().title, "Mathematics");
    assert!(matches!(client.get_module(9).await, Err(AppError::NotFound(_))));

    let tutors = client.get_all_tutors().await.unwrap();
    assert_eq!(tutors[1].title, None);
    assert_eq!(tutors[1].display_name(), "Jean Grey");

    let tutor = client.get_tutor(1).await.unwrap();
    assert_eq!(tutor.display_name(), "Dr. Charles Xavier");
    assert!(matches!(client.get_tutor(9).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_student_record_joins_modules_and_grades() {
    let client = serve(vec![
        ("/students/ST001/", 200, STUDENT),
        ("/modules/", 200, MODULES),
        ("/students/ST001/grades/", 200, GRADES),
    ])
    .await;

    let record = client.fetch_student_record("ST001").await.unwrap();
    let rows = record.module_results();

    assert_eq!(record.student.student_id, "ST001");
    assert_eq!(rows[0].title, "Mathematics");
    assert_eq!(format_score(rows[0].score), "88.0%");
    assert_eq!(rows[1].title, "Physics");
    assert_eq!(format_score(rows[1].score), "Not graded");

    let state = StudentRecordState::from_result(Ok(record));
    assert!(state.data().is_some());
}

#[tokio::test]
async fn test_student_record_for_unknown_student() {
    let client = serve(vec![("/modules/", 200, MODULES)]).await;

    let result = client.fetch_student_record("ST404").await;
    assert_eq!(result, Err(AppError::StudentNotFound("ST404".to_string())));

    let state = StudentRecordState::from_result(result);
    assert_eq!(state, StudentRecordState::Error(STUDENT_NOT_FOUND.to_string()));
}

#[tokio::test]
async fn test_student_record_fails_when_any_fetch_fails() {
    let client = serve(vec![
        ("/students/ST001/", 200, STUDENT),
        ("/modules/", 500, SERVER_ERROR),
        ("/students/ST001/grades/", 200, GRADES),
    ])
    .await;

    let result = client.fetch_student_record("ST001").await;
    assert!(matches!(&result, Err(AppError::Api(_))));

    let state = StudentRecordState::from_result(result);
    assert_eq!(state, StudentRecordState::Error(STUDENT_ERROR.to_string()));
}
