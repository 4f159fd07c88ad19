use std::collections::HashSet;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::config::asset_path;

/// Merge utility-class fragments left to right. When two classes set the
/// same style property under the same variant prefix, the later one wins;
/// everything else is kept in its original order.
pub fn merge_classes<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = fragments
        .into_iter()
        .flat_map(|fragment| {
            fragment
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    // Walk from the right so the last writer of each property is the one kept.
    // A shorthand also claims the axes/corners it covers (`p-4` after `px-2`).
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens.iter().rev() {
        let (scope, group) = conflict_key(token);
        if seen.contains(&format!("{scope}{group}")) {
            continue;
        }
        kept.push(token.as_str());
        for covered in covered_groups(&group) {
            seen.insert(format!("{scope}{covered}"));
        }
        seen.insert(format!("{scope}{group}"));
    }
    kept.reverse();
    kept.join(" ")
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "table",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const CORNERS: &[&str] = &["t", "b", "l", "r", "s", "e", "tl", "tr", "bl", "br"];
const SIDES: &[&str] = &["t", "b", "l", "r", "x", "y", "s", "e"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];
const BG_SIZE: &[&str] = &["auto", "cover", "contain"];
const BG_POSITION: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEAT: &[&str] =
    &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"];
const BG_ATTACHMENT: &[&str] = &["fixed", "local", "scroll"];
const COLORS: &[&str] = &[
    "inherit", "current", "transparent", "black", "white", "slate", "gray", "zinc", "neutral",
    "stone", "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky",
    "blue", "indigo", "violet", "purple", "fuchsia", "pink", "rose",
];
// Longer prefixes first: `min-h-4` must not be read as `min-` + `h-4`.
const SCALE_PREFIXES: &[&str] = &[
    "min-h", "max-h", "min-w", "max-w", "space-x", "space-y", "gap-x", "gap-y", "col-span",
    "row-span", "inset-x", "inset-y", "inset", "leading", "tracking", "items", "justify-items",
    "justify-self", "justify", "gap", "top", "bottom", "left", "right", "px", "py", "pt", "pb",
    "pl", "pr", "mx", "my", "mt", "mb", "ml", "mr", "h", "w", "p", "m", "z",
];

/// `("<variants>|<important>|", property group)` for one class.
fn conflict_key(class: &str) -> (String, String) {
    let (variants, utility) = split_variants(class);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    (format!("{variants}|{important}|"), property_group(utility))
}

/// Split `md:hover:text-white` into `("md:hover:", "text-white")`, ignoring
/// colons inside arbitrary values like `bg-[url(a:b)]`.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (index, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(index + 1),
            _ => {},
        }
    }
    match split_at {
        Some(index) => class.split_at(index),
        None => ("", class),
    }
}

fn property_group(utility: &str) -> String {
    if DISPLAY.contains(&utility) {
        return "display".to_string();
    }
    if POSITION.contains(&utility) {
        return "position".to_string();
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        let group = if FONT_SIZES.contains(&rest) || is_arbitrary_length(rest) {
            "font-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else if TEXT_WRAP.contains(&rest) {
            "text-wrap"
        } else if TEXT_OVERFLOW.contains(&rest) {
            "text-overflow"
        } else if is_color(rest) {
            "text-color"
        } else {
            return utility.to_string();
        };
        return group.to_string();
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        let group = if FONT_WEIGHTS.contains(&rest) { "font-weight" } else { "font-family" };
        return group.to_string();
    }
    match utility {
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => {
            return "flex-direction".to_string()
        },
        "flex-wrap" | "flex-nowrap" | "flex-wrap-reverse" => return "flex-wrap".to_string(),
        _ => {},
    }
    if utility == "rounded" || utility.starts_with("rounded-") {
        let corner = utility
            .strip_prefix("rounded-")
            .and_then(|rest| rest.split('-').next())
            .filter(|first| CORNERS.contains(first));
        return match corner {
            Some(corner) => format!("rounded-{corner}"),
            None => "rounded".to_string(),
        };
    }
    if utility == "shadow" || utility.starts_with("shadow-") {
        return "shadow".to_string();
    }
    if utility == "border" {
        return "border-width".to_string();
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return border_group(rest).unwrap_or_else(|| utility.to_string());
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        let group = if rest.starts_with("gradient-") || rest.starts_with("[url(") {
            "bg-image"
        } else if BG_SIZE.contains(&rest) {
            "bg-size"
        } else if BG_POSITION.contains(&rest) {
            "bg-position"
        } else if BG_REPEAT.contains(&rest) {
            "bg-repeat"
        } else if BG_ATTACHMENT.contains(&rest) {
            "bg-attachment"
        } else if is_color(rest) {
            "bg-color"
        } else {
            return utility.to_string();
        };
        return group.to_string();
    }
    if let Some(rest) = utility.strip_prefix("overflow-") {
        return match rest.split_once('-') {
            Some((axis @ ("x" | "y"), _)) => format!("overflow-{axis}"),
            _ => "overflow".to_string(),
        };
    }
    for prefix in ["opacity", "animate"] {
        if utility.starts_with(prefix) && utility[prefix.len()..].starts_with('-') {
            return prefix.to_string();
        }
    }
    for prefix in SCALE_PREFIXES {
        if utility.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('-')) {
            return (*prefix).to_string();
        }
    }
    utility.to_string()
}

fn border_group(rest: &str) -> Option<String> {
    if rest == "collapse" || rest == "separate" {
        return Some("border-collapse".to_string());
    }
    if BORDER_STYLES.contains(&rest) {
        return Some("border-style".to_string());
    }
    if is_width_value(rest) {
        return Some("border-width".to_string());
    }
    let (side, value) = match rest.split_once('-') {
        Some((side, value)) => (side, Some(value)),
        None => (rest, None),
    };
    if SIDES.contains(&side) {
        return match value {
            None => Some(format!("border-width-{side}")),
            Some(value) if is_width_value(value) => Some(format!("border-width-{side}")),
            Some(value) if is_color(value) => Some(format!("border-color-{side}")),
            Some(_) => None,
        };
    }
    is_color(rest).then(|| "border-color".to_string())
}

fn is_width_value(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())) || is_arbitrary_length(value)
}

/// `[13px]`, `[1.5rem]` or `[length:var(--x)]`.
fn is_arbitrary_length(value: &str) -> bool {
    match value.strip_prefix('[').and_then(|inner| inner.strip_suffix(']')) {
        Some(inner) => {
            inner.starts_with("length:")
                || inner.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.')
        },
        None => false,
    }
}

/// Palette names (`gray-100`, `black/30`) and arbitrary colors (`[#fff]`,
/// `[var(--text)]`).
fn is_color(value: &str) -> bool {
    if let Some(inner) = value.strip_prefix('[') {
        return ["#", "rgb", "hsl", "color:", "var("].iter().any(|prefix| inner.starts_with(prefix));
    }
    let name = value.split('/').next().unwrap_or(value);
    let family = name.split('-').next().unwrap_or(name);
    COLORS.contains(&family)
}

/// Groups a shorthand overrides besides its own.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-b",
            "rounded-l",
            "rounded-r",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-bl",
            "rounded-br",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-b" => &["rounded-bl", "rounded-br"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "border-width" => &[
            "border-width-t",
            "border-width-b",
            "border-width-l",
            "border-width-r",
            "border-width-x",
            "border-width-y",
            "border-width-s",
            "border-width-e",
        ],
        "border-width-x" => &["border-width-l", "border-width-r"],
        "border-width-y" => &["border-width-t", "border-width-b"],
        "border-color" => &[
            "border-color-t",
            "border-color-b",
            "border-color-l",
            "border-color-r",
            "border-color-x",
            "border-color-y",
        ],
        "p" => &["px", "py", "pt", "pb", "pl", "pr"],
        "px" => &["pl", "pr"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mb", "ml", "mr"],
        "mx" => &["ml", "mr"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "bottom", "left", "right"],
        "inset-x" => &["left", "right"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        _ => &[],
    }
}

/// Convert Markdown content into HTML with common extensions enabled.
/// Relative `images/` paths are served from the app's asset base.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if dest_url.starts_with("images/") => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::from(asset_path(&dest_url)),
            title,
            id,
        }),
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
