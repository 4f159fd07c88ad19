use curated_shared::ContentItem;
use yew::prelude::*;

use crate::components::nav_link::NavLink;

#[derive(Properties, PartialEq, Clone)]
pub struct ContentCardProps {
    pub item: ContentItem,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let item = &props.item;
    let image = item.image();
    let href = AttrValue::from(item.path.clone());

    html! {
        <article class="flex flex-col items-center p-6 rounded-lg bg-white dark:bg-gray-800 shadow-sm text-center">
            <NavLink href={href.clone()} tabindex={-1} class={classes!("flex-shrink-0")}>
                <img
                    src={image.src}
                    alt={image.alt}
                    width="160"
                    height="160"
                    loading="lazy"
                />
            </NavLink>
            <span class="mt-4 text-xs text-gray-500 uppercase font-semibold">{ &item.byline }</span>
            <h3 class="mt-1 text-lg font-bold leading-tight">
                <NavLink {href} class={classes!("hover:text-blue-600")}>
                    { &item.title }
                </NavLink>
            </h3>
            <NavLink
                href={item.instructor.path.clone()}
                class={classes!("mt-3", "flex", "items-center", "space-x-2", "text-sm", "text-gray-600")}
            >
                <img
                    src={item.instructor.image.clone()}
                    alt={item.instructor.name.clone()}
                    width="24"
                    height="24"
                    class="rounded-full"
                />
                <span>{ &item.instructor.name }</span>
            </NavLink>
        </article>
    }
}
