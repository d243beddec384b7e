use crate::models::{cohort::CohortStats, format::format_grade};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub stats: CohortStats,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Total Students"}</h3>
                    <p class="summary-value">{stats.total}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Average Grade"}</h3>
                    <p class="summary-value">{format_grade(stats.average)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Highest Grade"}</h3>
                    <p class="summary-value">{format_grade(stats.highest)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Lowest Grade"}</h3>
                    <p class="summary-value">{format_grade(stats.lowest)}</p>
                </div>
            </div>
        </div>
    }
}
