use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{error::AppError, transcript::StudentRecord};
use crate::services::api::fetch_student_record;
use wasm_bindgen_futures::spawn_local;

pub const STUDENT_ERROR: &str = "Failed to fetch student data";
pub const STUDENT_NOT_FOUND: &str = "Student not found";

#[derive(Clone, PartialEq, Debug)]
pub enum StudentRecordState {
    Loading,
    Loaded(Rc<StudentRecord>),
    Error(String),
}

impl StudentRecordState {
    pub fn from_result(result: Result<StudentRecord, AppError>) -> Self {
        match result {
            Ok(record) => StudentRecordState::Loaded(Rc::new(record)),
            Err(AppError::StudentNotFound(_)) => {
                StudentRecordState::Error(STUDENT_NOT_FOUND.to_string())
            }
            Err(_) => StudentRecordState::Error(STUDENT_ERROR.to_string()),
        }
    }

    pub fn data(&self) -> Option<&Rc<StudentRecord>> {
        match self {
            StudentRecordState::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Fetches a student's detail record, again whenever `student_id` changes.
#[hook]
pub fn use_student_record(student_id: String) -> UseStateHandle<StudentRecordState> {
    let state = use_state(|| StudentRecordState::Loading);

    {
        let state = state.clone();

        use_effect_with(student_id, move |student_id| {
            let student_id = student_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            // Reset to loading when the subject changes
            state.set(StudentRecordState::Loading);

            spawn_local(async move {
                let result = fetch_student_record(&student_id).await;
                if aborted_check.get() {
                    return; // Superseded or unmounted, ignore result
                }
                if let Err(e) = &result {
                    gloo::console::error!(format!("Failed to fetch student {student_id}: {e}"));
                }
                state.set(StudentRecordState::from_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
