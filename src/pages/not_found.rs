use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page empty">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Dashboard}>{"Back to the dashboard"}</Link<Route>>
        </div>
    }
}
