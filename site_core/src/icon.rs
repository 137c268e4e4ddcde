//! The icon catalog.
//!
//! Specialty records reference icons by name. The catalog is a closed
//! enumeration with an explicit default arm, not a runtime string map: an
//! unknown or missing name renders [`SpecialtyIcon::DEFAULT`] rather than
//! failing. Adding an icon is a compile-time change by design.

/// Every icon the specialty cards can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialtyIcon {
    Brain,
    Heart,
    BookOpen,
    Users,
    Award,
    Clock,
    Star,
    CheckCircle,
    Shield,
    Activity,
    Sun,
    Moon,
    Sparkles,
    MessageCircle,
    TrendingUp,
    Leaf,
    Flower,
    Handshake,
    HelpCircle,
    Home,
    Puzzle,
    Compass,
    Timer,
    Waves,
}

impl SpecialtyIcon {
    /// Rendered whenever a record references an icon the catalog does not
    /// know.
    pub const DEFAULT: SpecialtyIcon = SpecialtyIcon::Brain;

    /// Catalog lookup by the stored name. Never fails.
    pub fn from_name(name: &str) -> Self {
        use SpecialtyIcon::*;
        match name {
            "Brain" => Brain,
            "Heart" => Heart,
            "BookOpen" => BookOpen,
            "Users" => Users,
            "Award" => Award,
            "Clock" => Clock,
            "Star" => Star,
            "CheckCircle" => CheckCircle,
            "Shield" => Shield,
            "Activity" => Activity,
            "Sun" => Sun,
            "Moon" => Moon,
            "Sparkles" => Sparkles,
            "MessageCircle" => MessageCircle,
            "TrendingUp" => TrendingUp,
            "Leaf" => Leaf,
            "Flower" => Flower,
            "Handshake" => Handshake,
            "HelpCircle" => HelpCircle,
            "Home" => Home,
            "Puzzle" => Puzzle,
            "Compass" => Compass,
            "Timer" => Timer,
            "Waves" => Waves,
            _ => Self::DEFAULT,
        }
    }

    /// The stored-name form, the inverse of [`Self::from_name`].
    pub fn name(self) -> &'static str {
        use SpecialtyIcon::*;
        match self {
            Brain => "Brain",
            Heart => "Heart",
            BookOpen => "BookOpen",
            Users => "Users",
            Award => "Award",
            Clock => "Clock",
            Star => "Star",
            CheckCircle => "CheckCircle",
            Shield => "Shield",
            Activity => "Activity",
            Sun => "Sun",
            Moon => "Moon",
            Sparkles => "Sparkles",
            MessageCircle => "MessageCircle",
            TrendingUp => "TrendingUp",
            Leaf => "Leaf",
            Flower => "Flower",
            Handshake => "Handshake",
            HelpCircle => "HelpCircle",
            Home => "Home",
            Puzzle => "Puzzle",
            Compass => "Compass",
            Timer => "Timer",
            Waves => "Waves",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_name_falls_back_to_the_default() {
        assert_eq!(SpecialtyIcon::from_name("Unknown"), SpecialtyIcon::DEFAULT);
        assert_eq!(SpecialtyIcon::from_name(""), SpecialtyIcon::Brain);
    }

    #[test]
    fn known_names_round_trip() {
        for icon in [
            SpecialtyIcon::Heart,
            SpecialtyIcon::Leaf,
            SpecialtyIcon::MessageCircle,
            SpecialtyIcon::CheckCircle,
        ] {
            assert_eq!(SpecialtyIcon::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn lookup_is_case_sensitive_like_the_stored_names() {
        assert_eq!(SpecialtyIcon::from_name("heart"), SpecialtyIcon::DEFAULT);
    }
}
