use std::collections::BTreeMap;

use curated_shared::TrackEvent;
use yew::prelude::*;

use crate::tracking::{use_tracker, Tracker};

#[derive(Properties, PartialEq)]
pub struct ExternalTrackedLinkProps {
    pub event_name: AttrValue,
    #[prop_or_default]
    pub params: BTreeMap<String, String>,
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Outbound link that reports one analytics event per click and leaves the
/// navigation itself to the browser.
#[function_component(ExternalTrackedLink)]
pub fn external_tracked_link(props: &ExternalTrackedLinkProps) -> Html {
    let tracker = use_tracker();
    let onclick = click_handler(&tracker, &props.event_name, &props.params);

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}

fn click_handler<E: 'static>(
    tracker: &Tracker,
    event_name: &str,
    params: &BTreeMap<String, String>,
) -> Callback<E> {
    tracker
        .on_click(TrackEvent::new(event_name, params.clone()))
        .reform(|_: E| ())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recording_tracker() -> (Tracker, Rc<RefCell<Vec<TrackEvent>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let tracker = {
            let received = received.clone();
            Tracker::new(Callback::from(move |event| received.borrow_mut().push(event)))
        };
        (tracker, received)
    }

    #[test]
    fn each_click_reports_the_configured_event() {
        let (tracker, received) = recording_tracker();
        let params = BTreeMap::from([("location".to_string(), "docker curated page".to_string())]);
        let onclick = click_handler::<()>(&tracker, "clicked epic react banner", &params);

        onclick.emit(());
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(
            received.borrow()[0],
            TrackEvent::new("clicked epic react banner", [("location", "docker curated page")])
        );

        onclick.emit(());
        assert_eq!(received.borrow().len(), 2);
    }

    #[test]
    fn empty_params_are_sent_as_is() {
        let (tracker, received) = recording_tracker();
        click_handler::<()>(&tracker, "clicked promo", &BTreeMap::new()).emit(());

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "clicked promo");
        assert!(received[0].params.is_empty());
    }
}
