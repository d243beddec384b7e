use crate::models::tutor::Tutor;
use crate::services::api::fetch_tutor;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum TutorState {
    Loading,
    Loaded(Rc<Tutor>),
    Error(String),
}

#[hook]
pub fn use_tutor(tutor_id: u32) -> UseStateHandle<TutorState> {
    let state = use_state(|| TutorState::Loading);

    {
        let state = state.clone();

        use_effect_with(tutor_id, move |tutor_id| {
            let tutor_id = *tutor_id;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(TutorState::Loading);

            spawn_local(async move {
                match fetch_tutor(tutor_id).await {
                    Ok(tutor) if !aborted_check.get() => {
                        state.set(TutorState::Loaded(Rc::new(tutor)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::warn!(format!("Failed to fetch tutor {tutor_id}: {e}"));
                        state.set(TutorState::Error(e.to_string()));
                    }
                    _ => {} // Request was aborted, ignore result
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
