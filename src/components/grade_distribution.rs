use std::rc::Rc;
use yew::prelude::*;

use crate::models::{cohort::Cohort, format::format_grade};

#[derive(Properties, PartialEq)]
pub struct GradeDistributionProps {
    pub cohort: Rc<Cohort>,
    /// Receives the student id of the clicked bar
    pub on_select: Callback<String>,
}

/// One bar per student, as tall as their average grade
#[function_component(GradeDistribution)]
pub fn grade_distribution(props: &GradeDistributionProps) -> Html {
    html! {
        <div class="distribution">
            <div class="distribution-axis">
                <span>{"100%"}</span>
                <span>{"75%"}</span>
                <span>{"50%"}</span>
                <span>{"25%"}</span>
                <span>{"0%"}</span>
            </div>
            <div class="distribution-bars">
                {
                    props.cohort.students().iter().map(|student| {
                        let name = student.full_name();
                        let title = format!("{name}: {}", format_grade(student.average_grade));
                        let style = format!(
                            "height: {:.1}%;",
                            (student.average_grade * 100.0).clamp(0.0, 100.0)
                        );
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let student_id = student.student_id.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(student_id.clone()))
                        };

                        html! {
                            <div
                                key={student.student_id.clone()}
                                class="distribution-bar"
                                role="button"
                                aria-label={format!("View details for {name}")}
                                {title}
                                {style}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
