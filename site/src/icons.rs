//! SVG glyphs for the specialty icon catalog.
//!
//! Lucide-style 24px stroke icons, inlined as path data so the site ships
//! no icon font. The catalog itself (names, default arm) lives in
//! `amparo_core::icon`; this module only maps each variant to its path.

use amparo_core::icon::SpecialtyIcon;
use leptos::prelude::*;

/// Renders one catalog icon as an inline SVG.
///
/// `color` is the specialty's accent (any CSS color); empty means inherit.
#[component]
pub fn SpecialtyGlyph(
    icon: SpecialtyIcon,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Stroke color (CSS color value); empty inherits `currentColor`
    #[prop(into, default = String::new())]
    color: String,
) -> impl IntoView {
    let style = if color.is_empty() {
        String::new()
    } else {
        format!("color: {color}")
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            style=style
        >
            <path d=icon_path(icon)></path>
        </svg>
    }
}

/// Path data for every catalog variant. Exhaustive on purpose: adding an
/// icon without a glyph is a compile error.
pub fn icon_path(icon: SpecialtyIcon) -> &'static str {
    use SpecialtyIcon::*;
    match icon {
        Brain => PATH_BRAIN,
        Heart => PATH_HEART,
        BookOpen => PATH_BOOK_OPEN,
        Users => PATH_USERS,
        Award => PATH_AWARD,
        Clock => PATH_CLOCK,
        Star => PATH_STAR,
        CheckCircle => PATH_CHECK_CIRCLE,
        Shield => PATH_SHIELD,
        Activity => PATH_ACTIVITY,
        Sun => PATH_SUN,
        Moon => PATH_MOON,
        Sparkles => PATH_SPARKLES,
        MessageCircle => PATH_MESSAGE_CIRCLE,
        TrendingUp => PATH_TRENDING_UP,
        Leaf => PATH_LEAF,
        Flower => PATH_FLOWER,
        Handshake => PATH_HANDSHAKE,
        HelpCircle => PATH_HELP_CIRCLE,
        Home => PATH_HOME,
        Puzzle => PATH_PUZZLE,
        Compass => PATH_COMPASS,
        Timer => PATH_TIMER,
        Waves => PATH_WAVES,
    }
}

pub const PATH_BRAIN: &str = "M9.5 2A2.5 2.5 0 0 0 7 4.5v1.1A3.5 3.5 0 0 0 4.5 9v.6A3.5 3.5 0 0 0 3 12.5 3.5 3.5 0 0 0 4.6 15 3.5 3.5 0 0 0 7 19.4v.1a2.5 2.5 0 0 0 5 0v-15A2.5 2.5 0 0 0 9.5 2ZM14.5 2A2.5 2.5 0 0 1 17 4.5v1.1A3.5 3.5 0 0 1 19.5 9v.6a3.5 3.5 0 0 1 1.5 2.9 3.5 3.5 0 0 1-1.6 2.5A3.5 3.5 0 0 1 17 19.4v.1a2.5 2.5 0 0 1-5 0v-15A2.5 2.5 0 0 1 14.5 2Z";
pub const PATH_HEART: &str = "M12 21C12 21 4 14.3 4 8.9 4 5.6 6.6 3 9.8 3c1.2 0 2.2.5 2.2.5S13.2 3 14.4 3C17.6 3 20 5.6 20 8.9 20 14.3 12 21 12 21Z";
pub const PATH_BOOK_OPEN: &str = "M2 4h7a3 3 0 0 1 3 3v13a2 2 0 0 0-2-2H2ZM22 4h-7a3 3 0 0 0-3 3v13a2 2 0 0 1 2-2h8Z";
pub const PATH_USERS: &str = "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8ZM22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8";
pub const PATH_AWARD: &str = "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12ZM8.2 13.9 7 21l5-3 5 3-1.2-7.1";
pub const PATH_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20ZM12 6v6l4 2";
pub const PATH_STAR: &str = "m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21 7 14.2l-5-4.9 6.9-1Z";
pub const PATH_CHECK_CIRCLE: &str = "M22 11.1V12a10 10 0 1 1-5.9-9.1M22 4 12 14l-3-3";
pub const PATH_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z";
pub const PATH_ACTIVITY: &str = "M22 12h-4l-3 9L9 3l-3 9H2";
pub const PATH_SUN: &str = "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10ZM12 1v2M12 21v2M4.2 4.2l1.4 1.4M18.4 18.4l1.4 1.4M1 12h2M21 12h2M4.2 19.8l1.4-1.4M18.4 5.6l1.4-1.4";
pub const PATH_MOON: &str = "M21 12.8A9 9 0 1 1 11.2 3 7 7 0 0 0 21 12.8Z";
pub const PATH_SPARKLES: &str = "m12 3 1.9 5.8a2 2 0 0 0 1.3 1.3L21 12l-5.8 1.9a2 2 0 0 0-1.3 1.3L12 21l-1.9-5.8a2 2 0 0 0-1.3-1.3L3 12l5.8-1.9a2 2 0 0 0 1.3-1.3ZM5 3v4M19 17v4M3 5h4M17 19h4";
pub const PATH_MESSAGE_CIRCLE: &str = "M21 11.5a8.4 8.4 0 0 1-8.5 8.5 8.6 8.6 0 0 1-3.8-.9L3 21l1.9-5.7a8.5 8.5 0 1 1 16.1-3.8Z";
pub const PATH_TRENDING_UP: &str = "m22 7-8.5 8.5-5-5L2 17M16 7h6v6";
pub const PATH_LEAF: &str = "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.5 19 2c1 2 2 4.2 2 8 0 5.5-4.8 10-10 10ZM2 21c0-3 1.9-5.5 3.5-7";
pub const PATH_FLOWER: &str = "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6ZM12 9V5.5a2.5 2.5 0 1 1 5 0V9M12 9h3.5a2.5 2.5 0 1 1 0 6H12M12 15v3.5a2.5 2.5 0 1 1-5 0V15M12 15H8.5a2.5 2.5 0 1 1 0-6H12";
pub const PATH_HANDSHAKE: &str = "m11 17 2 2a1.4 1.4 0 1 0 2-2m1-1 2.5 2.5a1.4 1.4 0 1 0 2-2L15.7 11a2 2 0 0 0-2.8 0L11.9 12a2 2 0 0 1-2.8-2.8L12 6.3a4 4 0 0 1 5.7 0l3.3 3.4M21 3l-3 2.5M3 3l3 2.5M2 9.5l4.5 4.4a1.4 1.4 0 1 0 2-2";
pub const PATH_HELP_CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20ZM9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3M12 17h.01";
pub const PATH_HOME: &str = "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2ZM9 22V12h6v10";
pub const PATH_PUZZLE: &str = "M19.4 14a2.6 2.6 0 1 0 0-4H19V7a2 2 0 0 0-2-2h-3v-.6a2.6 2.6 0 1 0-4 0V5H7a2 2 0 0 0-2 2v3h-.6a2.6 2.6 0 1 0 0 4H5v3a2 2 0 0 0 2 2h3v.6a2.6 2.6 0 1 0 4 0V19h3a2 2 0 0 0 2-2v-3Z";
pub const PATH_COMPASS: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20ZM16.2 7.8l-2.2 6.4-6.4 2.2 2.2-6.4Z";
pub const PATH_TIMER: &str = "M10 2h4M12 14l3-3M12 22a8 8 0 1 0 0-16 8 8 0 0 0 0 16Z";
pub const PATH_WAVES: &str = "M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1";
