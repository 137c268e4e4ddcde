//! Per-section visibility flags.
//!
//! The admin panel can switch whole page sections on and off through the
//! `sections_visibility` config record. Resolution is deliberately
//! *fail-open*: a flag absent from config, a malformed record, or a config
//! list that has not loaded yet all resolve to visible, so a misconfigured
//! or not-yet-seeded site still shows its content.

use serde_json::Value;

use crate::config::{self, ConfigRecord, keys};

/// Resolved visibility for every known page section.
///
/// Derived fresh from config on every call, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionVisibility {
    pub hero: bool,
    pub about: bool,
    pub services: bool,
    pub testimonials: bool,
    pub faq: bool,
    pub contact: bool,
    pub photo_carousel: bool,
    pub inspirational: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        SectionVisibility {
            hero: true,
            about: true,
            services: true,
            testimonials: true,
            faq: true,
            contact: true,
            photo_carousel: true,
            inspirational: true,
        }
    }
}

impl SectionVisibility {
    /// Resolves the flags from a config list that may not have loaded yet.
    ///
    /// Only an explicit boolean `false` hides a section; any other shape
    /// under the flag name counts as visible.
    pub fn resolve(configs: Option<&[ConfigRecord]>) -> Self {
        let value = configs.and_then(|list| config::value_of(list, keys::SECTIONS_VISIBILITY));
        let flag = |name: &str| -> bool {
            value
                .and_then(|v| v.get(name))
                .and_then(Value::as_bool)
                .unwrap_or(true)
        };

        let resolved = SectionVisibility {
            hero: flag("hero"),
            about: flag("about"),
            services: flag("services"),
            testimonials: flag("testimonials"),
            faq: flag("faq"),
            contact: flag("contact"),
            photo_carousel: flag("photo-carousel"),
            inspirational: flag("inspirational"),
        };
        tracing::debug!(?resolved, "resolved section visibility");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn visibility_record(value: serde_json::Value) -> ConfigRecord {
        ConfigRecord {
            key: keys::SECTIONS_VISIBILITY.into(),
            value,
        }
    }

    #[test]
    fn unloaded_config_shows_everything() {
        assert_eq!(
            SectionVisibility::resolve(None),
            SectionVisibility::default()
        );
    }

    #[test]
    fn missing_record_shows_everything() {
        let configs = vec![ConfigRecord {
            key: "general_info".into(),
            value: json!({"name": "x"}),
        }];
        assert_eq!(
            SectionVisibility::resolve(Some(&configs)),
            SectionVisibility::default()
        );
    }

    #[test]
    fn malformed_record_shows_everything() {
        let configs = vec![visibility_record(json!("definitely not an object"))];
        assert_eq!(
            SectionVisibility::resolve(Some(&configs)),
            SectionVisibility::default()
        );
    }

    #[test]
    fn one_disabled_flag_leaves_the_others_alone() {
        let configs = vec![visibility_record(json!({"about": false}))];
        let resolved = SectionVisibility::resolve(Some(&configs));
        assert!(!resolved.about);
        assert_eq!(
            SectionVisibility {
                about: true,
                ..resolved
            },
            SectionVisibility::default()
        );
    }

    #[test]
    fn hyphenated_flag_name_is_honored() {
        let configs = vec![visibility_record(json!({"photo-carousel": false}))];
        assert!(!SectionVisibility::resolve(Some(&configs)).photo_carousel);
    }

    #[test]
    fn non_boolean_flag_counts_as_visible() {
        let configs = vec![visibility_record(json!({"faq": "false"}))];
        assert!(SectionVisibility::resolve(Some(&configs)).faq);
    }
}
