//! Curated topic landing pages, rendered client-side with Yew.

mod components;
mod config;
mod pages;
mod router;
mod tracking;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <tracking::TrackerProvider>
            <router::AppRouter />
        </tracking::TrackerProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
