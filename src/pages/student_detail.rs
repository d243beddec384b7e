use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    module_table::ModuleTable,
    status::{ErrorAlert, Spinner},
    student_info::StudentInfo,
};
use crate::hooks::use_student_record::{StudentRecordState, use_student_record};

#[derive(Properties, PartialEq)]
pub struct StudentDetailProps {
    pub student_id: String,
}

#[function_component(StudentDetailPage)]
pub fn student_detail_page(props: &StudentDetailProps) -> Html {
    let state = use_student_record(props.student_id.clone());
    let navigator = use_navigator();

    // Start at the top when the subject changes
    use_effect_with(props.student_id.clone(), |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    match &*state {
        StudentRecordState::Loading => html! { <Spinner /> },
        StudentRecordState::Error(message) => html! {
            <ErrorAlert message={message.clone()} on_back={Some(on_back)} />
        },
        StudentRecordState::Loaded(record) => html! {
            <div class="page">
                <button class="back-button" onclick={on_back}>{"← Back"}</button>

                <StudentInfo student={record.student.clone()} />

                <section class="card">
                    <h2>{"Available Modules"}</h2>
                    <ModuleTable results={record.module_results()} />
                </section>
            </div>
        },
    }
}
