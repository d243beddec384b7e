use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NavBar;
use crate::hooks::use_theme::{Theme, use_theme};
use crate::routes::{Route, switch};

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme();

    html! {
        <BrowserRouter>
            <ContextProvider<Theme> context={theme.theme}>
                <div class="app-container">
                    <NavBar theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />

                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>

                    <style>
                        {include_str!("style.css")}
                    </style>
                </div>
            </ContextProvider<Theme>>
        </BrowserRouter>
    }
}
