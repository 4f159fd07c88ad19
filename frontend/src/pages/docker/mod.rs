//! Docker curated topic page and its course banner.

mod background;

use curated_shared::{Catalog, CatalogError, ContentItem, LinkType, TrackEvent, Topic};
use yew::prelude::*;

pub use self::background::DockerBackground;
use crate::{
    components::{
        curated_topic::CuratedTopicShell, external_tracked_link::ExternalTrackedLink,
        nav_link::NavLink,
    },
    tracking::use_tracker,
};

const DOCKER_PAGE_DATA: &str = include_str!("../../../content/docker.json");

/// Where the banner sends visitors, whatever resource it features.
pub const COURSE_HREF: &str =
    "/playlists/containerize-full-stack-javascript-applications-with-docker-30a8";

const DESCRIPTION: &str = "Docker containers wrap a piece of software in a complete filesystem \
                           that contains everything needed to run: code, runtime, system tools, \
                           system libraries – anything that can be installed on a server. This \
                           guarantees that the software will always run the same, regardless of \
                           its environment.";

/// Header copy for the Docker topic page.
pub fn docker_topic() -> Topic {
    Topic {
        label: "Docker".to_string(),
        name: "docker".to_string(),
        description: DESCRIPTION.to_string(),
    }
}

type PageState = Result<(Catalog, Callback<AttrValue, Html>), CatalogError>;

/// Parse a catalog document and bind the banner to its jumbotron item.
fn load_page(document: &str) -> PageState {
    let catalog = Catalog::from_json(document)?;
    let cta = docker_cta(&catalog)?;
    Ok((catalog, cta))
}

/// Call-to-action renderer for the topic shell, bound to the catalog's
/// jumbotron item.
fn docker_cta(catalog: &Catalog) -> Result<Callback<AttrValue, Html>, CatalogError> {
    let resource = catalog.jumbotron()?.clone();
    Ok(Callback::from(move |location: AttrValue| {
        html! { <DockerCourse {location} resource={resource.clone()} /> }
    }))
}

fn page_view(page: &PageState) -> Html {
    match page {
        Ok((catalog, cta)) => html! {
            <main class="px-5">
                <CuratedTopicShell
                    topic={docker_topic()}
                    catalog={catalog.clone()}
                    cta={Some(cta.clone())}
                />
            </main>
        },
        Err(e) => html! {
            <main class="px-5">
                <p role="alert" class="max-w-screen-xl mx-auto py-10 text-red-600">
                    { e.to_string() }
                </p>
            </main>
        },
    }
}

#[function_component(DockerPage)]
pub fn docker_page() -> Html {
    let page = use_memo((), |_| load_page(DOCKER_PAGE_DATA));

    {
        let page = page.clone();
        use_effect_with((), move |_| {
            if let Err(e) = &*page {
                web_sys::console::error_1(&format!("Failed to load Docker page: {}", e).into());
            }
            || ()
        });
    }

    page_view(&page)
}

/// Clickable parts of the course banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BannerLink {
    Image,
    Title,
    Instructor,
    Banner,
}

impl BannerLink {
    const ALL: [BannerLink; 4] =
        [BannerLink::Image, BannerLink::Title, BannerLink::Instructor, BannerLink::Banner];
}

/// The event a click on `link` reports.
fn banner_event(resource: &ContentItem, location: &str, link: BannerLink) -> TrackEvent {
    match link {
        BannerLink::Image => TrackEvent::jumbotron_resource(&resource.path, LinkType::Image),
        BannerLink::Title => TrackEvent::jumbotron_resource(&resource.path, LinkType::Text),
        BannerLink::Instructor => TrackEvent::jumbotron_instructor(&resource.instructor.slug),
        BannerLink::Banner => TrackEvent::promo_banner(location),
    }
}

/// One event per banner link, in [`BannerLink::ALL`] order.
fn banner_events(resource: &ContentItem, location: &str) -> [(BannerLink, TrackEvent); 4] {
    BannerLink::ALL.map(|link| (link, banner_event(resource, location, link)))
}

#[derive(Properties, PartialEq)]
pub struct DockerCourseProps {
    /// Page context reported with the banner click.
    pub location: AttrValue,
    /// The catalog's jumbotron item.
    pub resource: ContentItem,
}

/// Jumbotron promoting the Docker course. Every link inside reports its own
/// event; the banner as a whole reports one more.
#[function_component(DockerCourse)]
pub fn docker_course(props: &DockerCourseProps) -> Html {
    let tracker = use_tracker();
    let ContentItem {
        path,
        title,
        byline,
        instructor,
        ..
    } = &props.resource;
    let image = props.resource.image();
    let href = AttrValue::from(path.clone());

    let [image_event, title_event, instructor_event, banner] =
        banner_events(&props.resource, &props.location).map(|(_, event)| event);
    let on_image = tracker.on_click(image_event);
    let on_title = tracker.on_click(title_event);
    let on_instructor = tracker.on_click(instructor_event);

    html! {
        <ExternalTrackedLink
            event_name={banner.name}
            params={banner.params}
            class={classes!(
                "block", "md:col-span-4", "w-full", "h-full", "overflow-hidden",
                "border-0", "border-gray-100", "relative", "text-center"
            )}
            href={COURSE_HREF}
        >
            <div class="md:min-h-[477px] md:-mt-5 flex items-center justify-center bg-gray-900 dark:bg-gray-800 text-white overflow-hidden rounded-b-lg md:rounded-t-none rounded-t-lg shadow-sm">
                <div class="relative z-10 px-5 sm:py-16 py-10 sm:text-left text-center">
                    <div class="space-y-5 mx-auto flex items-center justify-center max-w-screen-xl">
                        <div class="flex flex-col items-center justify-center sm:space-x-5 sm:space-y-0 space-y-5">
                            <div class="flex-shrink-0">
                                <NavLink href={href.clone()} tabindex={-1} on_activate={on_image}>
                                    <img src={image.src} alt={image.alt} width="250" height="250" />
                                </NavLink>
                            </div>
                            <div class="flex flex-col sm:items-start items-center">
                                <h2 class="text-xs text-orange-300 uppercase font-semibold mb-2">
                                    { byline }
                                </h2>
                                <NavLink
                                    {href}
                                    class={classes!("text-xl", "font-extrabold", "leading-tighter", "hover:text-blue-300")}
                                    on_activate={on_title}
                                >
                                    <h1>{ title }</h1>
                                </NavLink>
                                <NavLink
                                    href={instructor.path.clone()}
                                    class={classes!("mt-4", "flex", "items-center", "space-x-2", "text-base", "group")}
                                    on_activate={on_instructor}
                                >
                                    <img
                                        src={instructor.image.clone()}
                                        width="40"
                                        height="40"
                                        class="rounded-full"
                                        alt={instructor.name.clone()}
                                    />
                                    <span class="group-hover:text-blue-200">{ &instructor.name }</span>
                                </NavLink>
                            </div>
                        </div>
                    </div>
                </div>
                <DockerBackground class={classes!("absolute", "left-0", "top-0", "w-full", "h-full", "z-0")} />
            </div>
        </ExternalTrackedLink>
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use curated_shared::{ImageSource, Instructor, JUMBOTRON_ID};

    use super::*;
    use crate::tracking::Tracker;

    fn learn_docker() -> ContentItem {
        ContentItem {
            id: JUMBOTRON_ID.to_string(),
            path: "/playlists/x".to_string(),
            image: ImageSource::Bare("img.png".to_string()),
            title: "Learn Docker".to_string(),
            byline: "NEW COURSE".to_string(),
            instructor: Instructor {
                path: "/i".to_string(),
                image: "i.png".to_string(),
                name: "Jane".to_string(),
                slug: "jane".to_string(),
            },
        }
    }

    #[test]
    fn embedded_catalog_has_a_jumbotron() {
        let (catalog, _) = load_page(DOCKER_PAGE_DATA).unwrap();
        let jumbotron = catalog.jumbotron().unwrap();
        assert_eq!(jumbotron.path, COURSE_HREF);
        assert!(catalog.essentials().count() >= 3);
    }

    #[test]
    fn cta_requires_a_jumbotron() {
        let mut items = Catalog::from_json(DOCKER_PAGE_DATA).unwrap().items().to_vec();
        items.retain(|item| item.id != JUMBOTRON_ID);
        let err = docker_cta(&Catalog::new(items)).unwrap_err();
        assert!(matches!(err, CatalogError::MissingItem { .. }));
    }

    #[test]
    fn topic_descriptor() {
        let topic = docker_topic();
        assert_eq!(topic.label, "Docker");
        assert_eq!(topic.name, "docker");
        assert!(topic.description.starts_with("Docker containers wrap a piece of software"));
    }

    #[tokio::test]
    async fn course_banner_renders_resource_verbatim() {
        #[function_component]
        fn Harness() -> Html {
            html! { <DockerCourse location="docker curated page" resource={learn_docker()} /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("<h1>Learn Docker</h1>"));
        assert!(rendered.contains(
            "<h2 class=\"text-xs text-orange-300 uppercase font-semibold mb-2\">NEW COURSE</h2>"
        ));
        assert!(rendered.contains("<span class=\"group-hover:text-blue-200\">Jane</span>"));
        assert!(rendered.contains(&format!("href=\"{COURSE_HREF}\"")));
        assert_eq!(rendered.matches("href=\"/playlists/x\"").count(), 2);
        assert!(rendered.contains("href=\"/i\""));
        assert!(rendered.contains("alt=\"illustration for Learn Docker\""));
        assert!(rendered.contains("tabindex=\"-1\""));
        assert!(rendered.contains("viewBox=\"0 0 1000 477\""));
    }

    #[tokio::test]
    async fn page_renders_topic_and_embedded_jumbotron() {
        #[function_component]
        fn Harness() -> Html {
            html! { <DockerPage /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains(">Docker</h1>"));
        assert!(rendered.contains(
            "<h1>Containerize Full-Stack JavaScript Applications with Docker</h1>"
        ));
        assert!(rendered.contains("Run Your First Docker Container"));
        assert!(!rendered.contains("role=\"alert\""));
    }

    #[test]
    fn each_banner_link_reports_its_own_event() {
        let events = banner_events(&learn_docker(), "docker curated page");
        let links: Vec<BannerLink> = events.iter().map(|(link, _)| *link).collect();
        assert_eq!(links, BannerLink::ALL.to_vec());

        let event_for = |wanted: BannerLink| {
            events.iter().find(|(link, _)| *link == wanted).map(|(_, event)| event.clone()).unwrap()
        };
        assert_eq!(
            event_for(BannerLink::Image),
            TrackEvent::new("clicked jumbotron resource", [
                ("resource", "/playlists/x"),
                ("linkType", "image"),
            ])
        );
        assert_eq!(
            event_for(BannerLink::Title),
            TrackEvent::new("clicked jumbotron resource", [
                ("resource", "/playlists/x"),
                ("linkType", "text"),
            ])
        );
        assert_eq!(
            event_for(BannerLink::Instructor),
            TrackEvent::new("clicked instructor in jumbotron", [("instructor", "jane")])
        );
        assert_eq!(
            event_for(BannerLink::Banner),
            TrackEvent::new("clicked epic react banner", [("location", "docker curated page")])
        );
    }

    #[test]
    fn banner_link_clicks_fire_one_event_each() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let tracker = {
            let received = received.clone();
            Tracker::new(Callback::from(move |event| received.borrow_mut().push(event)))
        };
        let resource = learn_docker();

        for link in BannerLink::ALL {
            tracker.on_click(banner_event(&resource, "docker curated page", link)).emit(());
        }

        let received = received.borrow();
        assert_eq!(received.len(), 4);
        assert_eq!(received[0].param("linkType"), Some("image"));
        assert_eq!(received[1].param("linkType"), Some("text"));
        assert_eq!(received[2].param("instructor"), Some("jane"));
        assert_eq!(received[3].param("location"), Some("docker curated page"));
    }

    #[tokio::test]
    async fn page_shows_alert_without_jumbotron() {
        #[function_component]
        fn Harness() -> Html {
            let document = r#"[{
                "id": "compose",
                "path": "/lessons/compose",
                "image": "compose.png",
                "title": "Compose Basics",
                "byline": "LESSON",
                "instructor": {"path": "/k", "image": "k.png", "name": "Kim", "slug": "kim"}
            }]"#;
            page_view(&load_page(document))
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("role=\"alert\""));
        assert!(rendered.contains("content catalog has no item with id `jumbotron`"));
        assert!(!rendered.contains("Compose Basics"));
    }

    #[tokio::test]
    async fn page_shows_alert_for_malformed_catalog() {
        #[function_component]
        fn Harness() -> Html {
            page_view(&load_page("{ not json"))
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("role=\"alert\""));
        assert!(rendered.contains("failed to parse content catalog"));
    }
}
