use yew::prelude::*;
use yew_router::{prelude::*, AnyRoute};

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub href: AttrValue,
    /// Fired once per activation, before navigation starts.
    #[prop_or_default]
    pub on_activate: Option<Callback<()>>,
    #[prop_or_default]
    pub tabindex: Option<i32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Internal link. Routes this app owns are pushed through the router; any
/// other site path falls back to a regular page load.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let href = props.href.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            let plain_click = !(e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0);
            let navigation =
                activate(on_activate.as_ref(), &href, plain_click, navigator.is_some());
            if let (Navigation::Router, Some(navigator)) = (navigation, navigator.as_ref()) {
                e.prevent_default();
                navigator.push(&AnyRoute::new(href.as_str()));
            }
        })
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            tabindex={props.tabindex.map(|index| index.to_string())}
            {onclick}
        >
            { props.children.clone() }
        </a>
    }
}

/// Who carries out a click on a [`NavLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    /// Default link behavior: a page load, new tab or window.
    Browser,
    /// Pushed onto the app router without reloading.
    Router,
}

/// Report the activation, then decide how the click navigates.
fn activate(
    on_activate: Option<&Callback<()>>,
    href: &str,
    plain_click: bool,
    has_router: bool,
) -> Navigation {
    if let Some(cb) = on_activate {
        cb.emit(());
    }
    if plain_click && has_router && is_app_route(href) {
        Navigation::Router
    } else {
        Navigation::Browser
    }
}

fn is_app_route(href: &str) -> bool {
    matches!(Route::recognize(href), Some(route) if route != Route::NotFound)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn counter() -> (Callback<()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let cb = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (cb, count)
    }

    #[test]
    fn only_owned_routes_are_handled_client_side() {
        assert!(is_app_route(&Route::Docker.to_path()));
        assert!(!is_app_route("/playlists/containerize-full-stack-javascript-applications-with-docker-30a8"));
        assert!(!is_app_route("/q/kubernetes"));
    }

    #[test]
    fn every_activation_reports_once() {
        let (cb, count) = counter();
        let docker = Route::Docker.to_path();

        assert_eq!(activate(Some(&cb), &docker, true, true), Navigation::Router);
        assert_eq!(count.get(), 1);
        assert_eq!(activate(Some(&cb), "/playlists/x", true, true), Navigation::Browser);
        assert_eq!(count.get(), 2);
        assert_eq!(activate(Some(&cb), &docker, false, true), Navigation::Browser);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn router_only_takes_plain_clicks_on_owned_routes() {
        let docker = Route::Docker.to_path();
        assert_eq!(activate(None, &docker, true, true), Navigation::Router);
        assert_eq!(activate(None, &docker, true, false), Navigation::Browser);
        assert_eq!(activate(None, &docker, false, true), Navigation::Browser);
        assert_eq!(activate(None, "/i/jane", true, true), Navigation::Browser);
    }
}
