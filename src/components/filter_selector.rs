use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::cohort::ClassificationFilter;

#[derive(Properties, PartialEq)]
pub struct FilterSelectorProps {
    pub filter: ClassificationFilter,
    pub on_change: Callback<ClassificationFilter>,
}

/// Classification filter dropdown component
#[function_component(FilterSelector)]
pub fn filter_selector(props: &FilterSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(filter) = target.value().parse::<ClassificationFilter>() {
                callback.emit(filter);
            }
        })
    };

    html! {
        <div class="filter">
            <label for="classification-filter">{"Filter by Classification"}</label>
            <select id="classification-filter" class="filter-selector" onchange={on_change}>
                {
                    ClassificationFilter::options().into_iter().map(|option| {
                        let selected = option == props.filter;
                        html! {
                            <option value={option.value()} {selected}>{option.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}
