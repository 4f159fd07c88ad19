use curated_shared::{Catalog, Topic};
use yew::prelude::*;

use crate::{components::content_card::ContentCard, utils::markdown_to_html};

#[derive(Properties, PartialEq)]
pub struct CuratedTopicShellProps {
    pub topic: Topic,
    pub catalog: Catalog,
    /// Renders the call-to-action block; receives the tracking location.
    #[prop_or_default]
    pub cta: Option<Callback<AttrValue, Html>>,
}

/// Themed landing section: topic header, optional call to action and the
/// topic's essential resources.
#[function_component(CuratedTopicShell)]
pub fn curated_topic_shell(props: &CuratedTopicShellProps) -> Html {
    let topic = &props.topic;
    let description = use_memo(topic.description.clone(), |description| {
        AttrValue::from(markdown_to_html(description))
    });
    let location = cta_location(topic);

    html! {
        <section class="max-w-screen-xl mx-auto dark:text-gray-100">
            <div class="grid md:grid-cols-12 gap-5">
                <header class="md:col-span-8 px-5 sm:py-12 py-8">
                    <h1 class="text-3xl font-bold leading-tight">{ &topic.label }</h1>
                    <div class="mt-4 prose dark:prose-dark max-w-none">
                        { Html::from_html_unchecked((*description).clone()) }
                    </div>
                </header>
                {
                    match props.cta.as_ref() {
                        Some(cta) => cta.emit(location),
                        None => html! {},
                    }
                }
            </div>
            <ul class="mt-10 grid gap-5 sm:grid-cols-2 lg:grid-cols-3">
                { for props.catalog.essentials().map(|item| html! {
                    <li key={item.id.clone()}>
                        <ContentCard item={item.clone()} />
                    </li>
                }) }
            </ul>
        </section>
    }
}

/// Location reported by the call to action, e.g. "docker curated page".
pub fn cta_location(topic: &Topic) -> AttrValue {
    AttrValue::from(format!("{} curated page", topic.name))
}

#[cfg(test)]
mod tests {
    use curated_shared::{ContentItem, ImageSource, Instructor};

    use super::*;

    fn item(id: &str, title: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            path: format!("/lessons/{id}"),
            image: ImageSource::Bare(format!("{id}.png")),
            title: title.to_string(),
            byline: "LESSON".to_string(),
            instructor: Instructor {
                path: "/i/kim".to_string(),
                image: "kim.png".to_string(),
                name: "Kim".to_string(),
                slug: "kim".to_string(),
            },
        }
    }

    fn topic() -> Topic {
        Topic {
            label: "Docker".to_string(),
            name: "docker".to_string(),
            description: "Containers wrap **everything** needed to run.".to_string(),
        }
    }

    #[test]
    fn cta_location_uses_topic_name() {
        assert_eq!(cta_location(&topic()).as_str(), "docker curated page");
    }

    #[tokio::test]
    async fn renders_header_cta_and_essentials() {
        #[function_component]
        fn Harness() -> Html {
            let catalog = Catalog::new(vec![
                item("jumbotron", "Featured Course"),
                item("compose", "Compose Basics"),
                item("volumes", "Docker Volumes"),
            ]);
            let cta = Callback::from(|location: AttrValue| {
                html! { <aside id="cta">{ location.to_string() }</aside> }
            });
            html! { <CuratedTopicShell topic={topic()} {catalog} cta={Some(cta)} /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("<h1 class=\"text-3xl font-bold leading-tight\">Docker</h1>"));
        assert!(rendered.contains("<strong>everything</strong>"));
        assert!(rendered.contains("<aside id=\"cta\">docker curated page</aside>"));
        assert!(rendered.contains("Compose Basics"));
        assert!(rendered.contains("Docker Volumes"));
        assert!(rendered.contains("href=\"/lessons/compose\""));
        assert!(rendered.contains("alt=\"illustration for Compose Basics\""));
        assert!(!rendered.contains("Featured Course"));
    }

    #[tokio::test]
    async fn renders_without_cta() {
        #[function_component]
        fn Harness() -> Html {
            let catalog = Catalog::new(vec![item("compose", "Compose Basics")]);
            html! { <CuratedTopicShell topic={topic()} {catalog} /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("Compose Basics"));
        assert!(!rendered.contains("curated page"));
    }
}
