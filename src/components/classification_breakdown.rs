use crate::models::{
    cohort::CohortStats, format::format_percentage, student::Classification,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClassificationBreakdownProps {
    pub stats: CohortStats,
}

/// Count and share of students per classification
#[function_component(ClassificationBreakdown)]
pub fn classification_breakdown(props: &ClassificationBreakdownProps) -> Html {
    let stats = &props.stats;

    html! {
        <dl class="breakdown">
            {
                Classification::all().iter().map(|c| {
                    let count = stats.count(*c);
                    html! {
                        <div class="breakdown-row" key={c.value()}>
                            <dt>{c.label()}</dt>
                            <dd>
                                <span class={classes!("badge", c.css_class())}>
                                    {format!("{count} ({})", format_percentage(count, stats.total))}
                                </span>
                            </dd>
                        </div>
                    }
                }).collect::<Html>()
            }
        </dl>
    }
}
