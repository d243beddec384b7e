use yew::prelude::*;

use crate::components::classification_badge::ClassificationBadge;
use crate::models::{
    format::{format_date, format_grade},
    student::Student,
};

#[derive(Properties, PartialEq)]
pub struct StudentTableProps {
    pub students: Vec<Student>,
    pub on_select: Callback<String>,
}

#[function_component(StudentTable)]
pub fn student_table(props: &StudentTableProps) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Student ID"}</th>
                    <th>{"Name"}</th>
                    <th>{"Date of Birth"}</th>
                    <th>{"Average Grade"}</th>
                    <th>{"Classification"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.students.iter().map(|student| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let student_id = student.student_id.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(student_id.clone()))
                        };

                        html! {
                            <tr key={student.student_id.clone()} class="clickable" {onclick}>
                                <td class="cell-id">{&student.student_id}</td>
                                <td>{student.full_name()}</td>
                                <td>{format_date(student.dob)}</td>
                                <td>{format_grade(student.average_grade)}</td>
                                <td>
                                    <ClassificationBadge label={student.classification.clone()} />
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
