use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    filter_selector::FilterSelector,
    status::{ErrorAlert, Spinner},
    student_table::StudentTable,
};
use crate::hooks::use_students::{StudentsState, use_students};
use crate::models::cohort::ClassificationFilter;
use crate::routes::Route;

#[function_component(StudentListPage)]
pub fn student_list_page() -> Html {
    let state = use_students();
    let filter = use_state(ClassificationFilter::default);
    let navigator = use_navigator();

    // Filtering runs over the fetched list, never refetches
    let filtered = use_memo(((*state).clone(), *filter), |(state, filter)| {
        state
            .data()
            .map(|cohort| cohort.filter(*filter))
            .unwrap_or_default()
    });

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: ClassificationFilter| filter.set(selected))
    };

    let on_select = Callback::from(move |student_id: String| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::student(student_id));
        }
    });

    match &*state {
        StudentsState::Loading => html! { <Spinner /> },
        StudentsState::Error(message) => html! { <ErrorAlert message={message.clone()} /> },
        StudentsState::Loaded(_) => html! {
            <div class="page">
                <h1>{"Student Grades"}</h1>
                <FilterSelector filter={*filter} on_change={on_filter} />

                <section class="card">
                    <StudentTable students={(*filtered).clone()} {on_select} />
                </section>

                if filtered.is_empty() {
                    <p class="empty">{"No students found with the selected classification."}</p>
                }
            </div>
        },
    }
}
