use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="status loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
            <p class="sr-only">{"Loading..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
    /// Renders a "Back" button when set
    #[prop_or_default]
    pub on_back: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="status error" role="alert">
            <p><strong>{"Error! "}</strong>{&props.message}</p>
            if let Some(on_back) = props.on_back.clone() {
                <button class="back-button" onclick={on_back}>{"Back"}</button>
            }
        </div>
    }
}
