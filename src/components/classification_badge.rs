use yew::prelude::*;

use crate::models::student::Classification;

#[derive(Properties, PartialEq)]
pub struct ClassificationBadgeProps {
    /// Label as received from the API, shown unchanged
    pub label: AttrValue,
}

#[function_component(ClassificationBadge)]
pub fn classification_badge(props: &ClassificationBadgeProps) -> Html {
    let color = props
        .label
        .parse::<Classification>()
        .map_or("badge-unknown", |c| c.css_class());

    html! {
        <span class={classes!("badge", color)}>{&props.label}</span>
    }
}
