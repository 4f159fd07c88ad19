use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="max-w-screen-xl mx-auto px-5 py-20 text-center">
            <h2 class="text-2xl font-bold">{"404 - Page not found"}</h2>
            <p class="mt-4">
                {"Nothing lives here. Try the "}
                <Link<Route> to={Route::Docker} classes={classes!("underline")}>{"Docker topic"}</Link<Route>>
                {"."}
            </p>
        </main>
    }
}
