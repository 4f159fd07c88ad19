//! Analytics sink and the context that hands it to components.

use curated_shared::TrackEvent;
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use yew::prelude::*;

#[cfg(not(feature = "mock"))]
use crate::config::analytics_endpoint;

/// Handle to the analytics sink. Tracking is fire-and-forget: callers never
/// see whether an event was delivered.
#[derive(Clone, PartialEq)]
pub struct Tracker {
    sink: Callback<TrackEvent>,
}

impl Tracker {
    /// Use `sink` to receive every tracked event.
    pub fn new(sink: Callback<TrackEvent>) -> Self {
        Self {
            sink,
        }
    }

    /// Dispatch one event.
    pub fn track(&self, event: TrackEvent) {
        self.sink.emit(event);
    }

    /// Callback that dispatches `event` each time it fires.
    pub fn on_click(&self, event: TrackEvent) -> Callback<()> {
        let tracker = self.clone();
        Callback::from(move |_| tracker.track(event.clone()))
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(Callback::from(send_event))
    }
}

#[cfg(feature = "mock")]
fn send_event(event: TrackEvent) {
    web_sys::console::log_1(&format!("track {:?} {:?}", event.name, event.params).into());
}

#[cfg(not(feature = "mock"))]
fn send_event(event: TrackEvent) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = post_event(&event).await {
            web_sys::console::warn_1(
                &format!("Failed to send analytics event `{}`: {}", event.name, e).into(),
            );
        }
    });
}

#[cfg(not(feature = "mock"))]
async fn post_event(event: &TrackEvent) -> Result<(), String> {
    let response = Request::post(&analytics_endpoint())
        .json(event)
        .map_err(|e| format!("Encode error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct TrackerProviderProps {
    /// Sink override; the network sink is used when absent.
    #[prop_or_default]
    pub tracker: Option<Tracker>,
    #[prop_or_default]
    pub children: Html,
}

/// Makes a [`Tracker`] available to every descendant.
#[function_component(TrackerProvider)]
pub fn tracker_provider(props: &TrackerProviderProps) -> Html {
    let tracker = use_memo(props.tracker.clone(), |tracker| tracker.clone().unwrap_or_default());

    html! {
        <ContextProvider<Tracker> context={(*tracker).clone()}>
            { props.children.clone() }
        </ContextProvider<Tracker>>
    }
}

/// The tracker from the nearest [`TrackerProvider`], or the network sink.
#[hook]
pub fn use_tracker() -> Tracker {
    use_context::<Tracker>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use curated_shared::LinkType;

    use super::*;

    #[test]
    fn track_forwards_each_event_once() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let tracker = {
            let received = received.clone();
            Tracker::new(Callback::from(move |event| received.borrow_mut().push(event)))
        };

        tracker.track(TrackEvent::jumbotron_resource("/playlists/x", LinkType::Text));
        tracker.track(TrackEvent::jumbotron_instructor("jane"));

        let received = received.borrow();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].param("linkType"), Some("text"));
        assert_eq!(received[1].name, "clicked instructor in jumbotron");
    }
}
