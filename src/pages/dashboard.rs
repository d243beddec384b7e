use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    chart::Chart,
    classification_breakdown::ClassificationBreakdown,
    grade_distribution::GradeDistribution,
    status::{ErrorAlert, Spinner},
    summary::Summary,
};
use crate::hooks::use_students::{StudentsState, use_students};
use crate::hooks::use_theme::Theme;
use crate::routes::Route;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_students();
    let theme = use_context::<Theme>().unwrap_or(Theme::Light);
    let navigator = use_navigator();

    let on_select = Callback::from(move |student_id: String| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::student(student_id));
        }
    });

    let cohort = match &*state {
        StudentsState::Loading => return html! { <Spinner /> },
        StudentsState::Error(message) => {
            return html! { <ErrorAlert message={message.clone()} /> };
        }
        StudentsState::Loaded(cohort) => cohort.clone(),
    };

    let Some(stats) = cohort.stats() else {
        return html! {
            <p class="empty">{"No student data available."}</p>
        };
    };

    html! {
        <div class="page">
            <h1>{"Student Performance Dashboard"}</h1>

            <section class="data-section">
                <Summary stats={stats.clone()} />
            </section>

            <section class="card">
                <h2>{"Classification Breakdown"}</h2>
                <p class="muted">{"Distribution of students by classification."}</p>
                <ClassificationBreakdown {stats} />
                <Chart cohort={cohort.clone()} dark_mode={theme == Theme::Dark} />
            </section>

            <section class="card">
                <h2>{"Grade Distribution"}</h2>
                <p class="muted">{"Average grade per student. Select a bar for details."}</p>
                <GradeDistribution {cohort} {on_select} />
            </section>
        </div>
    }
}
