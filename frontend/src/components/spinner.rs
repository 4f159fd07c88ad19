use yew::prelude::*;

use crate::utils::merge_classes;

const ARC_PATH: &str = "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 \
                        12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z";

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Extra classes, merged after the computed ones so they win on conflict.
    #[prop_or_default]
    pub class: Option<AttrValue>,
    /// Tailwind spacing step used for both height and width.
    #[prop_or(6)]
    pub size: u32,
    /// Tailwind color token applied through `currentColor`.
    #[prop_or_else(|| "white".to_string())]
    pub color: String,
    #[prop_or(false)]
    pub fullscreen: bool,
}

/// Spinning ring shown while something is in progress. The rotation is a CSS
/// animation; unmount the spinner to stop it.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let extra = props.class.as_ref().map(|class| class.as_str());
    let class = spinner_classes(props.size, &props.color, extra);

    let spinner = html! {
        <svg
            {class}
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            role="status"
            aria-busy="true"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            />
            <path class="opacity-75" fill="currentColor" d={ARC_PATH} />
        </svg>
    };

    if props.fullscreen {
        html! {
            <div
                class={classes!(
                    "fixed",
                    "inset-0",
                    "z-40",
                    "flex",
                    "items-center",
                    "justify-center",
                    "bg-black/30",
                    "dark:bg-black/60"
                )}
            >
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}

fn spinner_classes(size: u32, color: &str, extra: Option<&str>) -> String {
    merge_classes([
        format!("animate-spin h-{size} w-{size} text-{color}"),
        extra.unwrap_or_default().to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes_carry_size_and_color() {
        assert_eq!(spinner_classes(6, "white", None), "animate-spin h-6 w-6 text-white");
    }

    #[test]
    fn caller_color_overrides_default() {
        assert_eq!(
            spinner_classes(6, "white", Some("text-gray-500 ml-2")),
            "animate-spin h-6 w-6 text-gray-500 ml-2"
        );
        assert_eq!(spinner_classes(4, "blue-400", Some("h-8")), "animate-spin w-4 text-blue-400 h-8");
    }

    #[tokio::test]
    async fn renders_ring_and_arc() {
        #[function_component]
        fn Harness() -> Html {
            html! { <Spinner size={8} color="orange-300" class="mx-auto" /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains(r#"class="animate-spin h-8 w-8 text-orange-300 mx-auto""#));
        assert!(rendered.contains(r#"class="opacity-25""#));
        assert!(rendered.contains(r#"r="10""#));
        assert!(rendered.contains(ARC_PATH));
        assert!(!rendered.contains("fixed inset-0"));
    }

    #[tokio::test]
    async fn fullscreen_wraps_in_overlay() {
        #[function_component]
        fn Harness() -> Html {
            html! { <Spinner fullscreen={true} /> }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().hydratable(false).render().await;
        assert!(rendered.contains("fixed inset-0 z-40"));
        assert!(rendered.contains("animate-spin h-6 w-6 text-white"));
    }
}
