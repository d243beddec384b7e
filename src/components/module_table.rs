use yew::prelude::*;

use crate::models::{format::format_score, transcript::ModuleResult};

#[derive(Properties, PartialEq)]
pub struct ModuleTableProps {
    pub results: Vec<ModuleResult>,
}

/// Module catalog with the student's score per module
#[function_component(ModuleTable)]
pub fn module_table(props: &ModuleTableProps) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Module ID"}</th>
                    <th>{"Title"}</th>
                    <th>{"Grade"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.results.iter().map(|row| html! {
                        <tr key={row.module_id}>
                            <td class="cell-id">{row.module_id}</td>
                            <td>{&row.title}</td>
                            <td>
                                <span class={row.css_class()}>{format_score(row.score)}</span>
                            </td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
