use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::use_theme::Theme;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

/// Persistent header with links to the dashboard and the student list
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let current = use_route::<Route>();

    let link_class = |route: &Route| {
        if current.as_ref() == Some(route) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <nav class="app-header">
            <span class="app-title">{"Student Grades"}</span>
            <div class="nav-links">
                <Link<Route> classes={link_class(&Route::Dashboard)} to={Route::Dashboard}>
                    {"Dashboard"}
                </Link<Route>>
                <Link<Route> classes={link_class(&Route::Students)} to={Route::Students}>
                    {"Students"}
                </Link<Route>>
            </div>
            <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
        </nav>
    }
}
