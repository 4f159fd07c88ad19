use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::spinner::Spinner, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/curated/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/q/docker")]
    Docker,
    #[cfg(feature = "mock")]
    #[at("/curated/q/docker")]
    Docker,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/curated/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Docker} /> },
        Route::Docker => html! { <pages::docker::DockerPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let fallback = html! {
        <div class="flex items-center justify-center py-20">
            <Spinner size={10} color="gray-500" />
        </div>
    };

    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-gray-50 dark:bg-gray-900" style="min-height: 100vh; min-height: 100svh;">
                <Suspense {fallback}>
                    <Switch<Route> render={switch} />
                </Suspense>
            </div>
        </BrowserRouter>
    }
}
