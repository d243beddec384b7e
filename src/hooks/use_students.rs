use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{cohort::Cohort, error::AppError};
use crate::services::api::fetch_students;
use wasm_bindgen_futures::spawn_local;

/// Message shown by the dashboard and the student list when loading fails
pub const STUDENTS_ERROR: &str = "Failed to fetch students data";

#[derive(Clone, PartialEq, Debug)]
pub enum StudentsState {
    Loading,
    Loaded(Rc<Cohort>),
    Error(String),
}

impl StudentsState {
    /// Collapses any fetch failure into the generic page message
    pub fn from_result(result: Result<Cohort, AppError>) -> Self {
        match result {
            Ok(cohort) => StudentsState::Loaded(Rc::new(cohort)),
            Err(_) => StudentsState::Error(STUDENTS_ERROR.to_string()),
        }
    }

    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, StudentsState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Cohort>> {
        match self {
            StudentsState::Loaded(cohort) => Some(cohort),
            _ => None,
        }
    }
}

/// Fetches the student list once per mount.
#[hook]
pub fn use_students() -> UseStateHandle<StudentsState> {
    let state = use_state(|| StudentsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_students().await;
                if aborted_check.get() {
                    return; // Page unmounted, drop the result
                }
                if let Err(e) = &result {
                    gloo::console::error!(format!("Failed to fetch students: {e}"));
                }
                state.set(StudentsState::from_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
