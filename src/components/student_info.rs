use yew::prelude::*;

use crate::components::{classification_badge::ClassificationBadge, tutor_card::TutorCard};
use crate::models::{
    format::{format_date, format_grade},
    student::Student,
};

#[derive(Properties, PartialEq)]
pub struct StudentInfoProps {
    pub student: Student,
}

#[function_component(StudentInfo)]
pub fn student_info(props: &StudentInfoProps) -> Html {
    let student = &props.student;

    html! {
        <section class="card">
            <h2>{"Student Information"}</h2>
            <p class="muted">{"Personal details and academic performance."}</p>
            <dl class="info">
                <div class="info-row">
                    <dt>{"Student ID"}</dt>
                    <dd>{&student.student_id}</dd>
                </div>
                <div class="info-row">
                    <dt>{"Full name"}</dt>
                    <dd>{student.full_name()}</dd>
                </div>
                <div class="info-row">
                    <dt>{"Date of birth"}</dt>
                    <dd>{format_date(student.dob)}</dd>
                </div>
                <div class="info-row">
                    <dt>{"Average Grade"}</dt>
                    <dd>{format_grade(student.average_grade)}</dd>
                </div>
                <div class="info-row">
                    <dt>{"Classification"}</dt>
                    <dd><ClassificationBadge label={student.classification.clone()} /></dd>
                </div>
                <TutorCard tutor_id={student.personal_tutor_id} />
            </dl>
        </section>
    }
}
