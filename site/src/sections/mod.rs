// Page sections, config-driven

use amparo_core::text::highlight_segments;
use leptos::prelude::*;

mod about;
mod footer;
mod hero;
mod nav;
mod specialties;

pub use about::About;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use specialties::Specialties;

/// Gradient class applied to highlighted text when no `badge_gradient` is
/// configured.
const DEFAULT_GRADIENT: &str = "from-pink-500 to-purple-500";

/// Renders a text field honoring the `(highlight)` markup convention:
/// parenthesized runs get the gradient treatment, the rest stays plain.
#[component]
pub fn GradientText(
    #[prop(into)] text: String,
    /// Gradient class pair from the `badge_gradient` config, when set
    #[prop(optional_no_strip)]
    gradient: Option<String>,
) -> impl IntoView {
    let gradient = gradient.unwrap_or_else(|| DEFAULT_GRADIENT.to_string());
    let highlight_class =
        format!("bg-gradient-to-r {gradient} bg-clip-text text-transparent font-semibold");
    highlight_segments(&text)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                view! { <span class=highlight_class.clone()>{segment.text}</span> }.into_any()
            } else {
                view! { <span>{segment.text}</span> }.into_any()
            }
        })
        .collect_view()
}

/// Class toggling for the one-shot entrance animation.
pub(crate) fn reveal_class(base: &'static str, revealed: bool) -> String {
    if revealed {
        format!("{base} revealed")
    } else {
        base.to_string()
    }
}
