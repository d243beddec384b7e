use yew::prelude::*;

use crate::hooks::use_tutor::{TutorState, use_tutor};

#[derive(Properties, PartialEq)]
pub struct TutorCardProps {
    pub tutor_id: u32,
}

/// Personal tutor details, loaded separately from the page
#[function_component(TutorCard)]
pub fn tutor_card(props: &TutorCardProps) -> Html {
    let state = use_tutor(props.tutor_id);

    let body = match &*state {
        TutorState::Loading => html! { <p class="muted">{"Loading tutor..."}</p> },
        TutorState::Loaded(tutor) => html! {
            <>
                <p>{tutor.display_name()}</p>
                <p><a href={format!("mailto:{}", tutor.email)}>{&tutor.email}</a></p>
            </>
        },
        TutorState::Error(_) => html! { <p class="muted">{"Tutor unavailable"}</p> },
    };

    html! {
        <div class="info-row">
            <dt>{"Personal tutor"}</dt>
            <dd>{body}</dd>
        </div>
    }
}
