//! Config records and typed views over the known keys.
//!
//! The backend stores site content as a flat list of `{key, value}` records
//! where `value` is arbitrary JSON. The set of keys is an open convention:
//! the known ones get a typed view here (a serde struct plus display
//! accessors carrying the hardcoded fallback), everything else stays an
//! opaque [`serde_json::Value`].
//!
//! All views are `Default`-able and every accessor degrades to its default
//! when the key is missing or the value has the wrong shape. Malformed
//! config is data, not an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known config keys.
pub mod keys {
    pub const GENERAL_INFO: &str = "general_info";
    pub const PROFESSIONAL_TITLE: &str = "professional_title";
    pub const ABOUT_SECTION: &str = "about_section";
    pub const ABOUT_CREDENTIALS: &str = "about_credentials";
    pub const SPECIALTIES_SECTION: &str = "specialties_section";
    pub const BADGE_GRADIENT: &str = "badge_gradient";
    pub const HERO_IMAGE: &str = "hero_image";
    pub const SECTIONS_VISIBILITY: &str = "sections_visibility";
}

/// Hardcoded fallbacks used whenever config is absent.
pub mod defaults {
    pub const NAME: &str = "Dra. (Adrielle Benhossi)";
    pub const PROFESSIONAL_TITLE: &str = "Psicóloga Clínica";
    pub const CRP: &str = "08/123456";
    /// Shown on the page when no description was ever saved.
    pub const ABOUT_PLACEHOLDER: &str =
        "Este é o espaço para escrever sobre você no painel administrativo.";
    /// Seeded into the admin form when no description was ever saved.
    pub const ABOUT_DESCRIPTION: &str = "Com experiência em terapia cognitivo-comportamental, \
        ofereço um espaço seguro e acolhedor para você trabalhar suas questões emocionais e \
        desenvolver ferramentas para uma vida mais equilibrada.";
    pub const SPECIALTIES_TITLE: &str = "Minhas (especialidades)";
    pub const SPECIALTIES_SUBTITLE: &str = "Áreas especializadas onde posso te ajudar a \
        encontrar equilíbrio e bem-estar emocional";
}

/// One named, arbitrarily-shaped settings entry as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub key: String,
    pub value: Value,
}

/// Raw value lookup by key.
pub fn value_of<'a>(configs: &'a [ConfigRecord], key: &str) -> Option<&'a Value> {
    configs.iter().find(|c| c.key == key).map(|c| &c.value)
}

/// Deserializes the value under `key`, falling back to `T::default()` when
/// the key is missing or the value does not have the expected shape.
fn typed_or_default<T>(configs: &[ConfigRecord], key: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    value_of(configs, key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

/// `general_info` - practitioner identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInfo {
    pub name: Option<String>,
    pub professional_title: Option<String>,
    pub crp: Option<String>,
}

impl GeneralInfo {
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(defaults::NAME)
    }

    pub fn display_crp(&self) -> &str {
        non_empty(&self.crp).unwrap_or(defaults::CRP)
    }
}

/// `professional_title` - the line under the practitioner name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalTitle {
    pub title: Option<String>,
}

impl ProfessionalTitle {
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(defaults::PROFESSIONAL_TITLE)
    }
}

/// `about_section` - the free-form description shown on the about card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub description: Option<String>,
}

impl AboutSection {
    /// Page-side text: placeholder prompt when nothing was saved.
    pub fn display_description(&self) -> &str {
        non_empty(&self.description).unwrap_or(defaults::ABOUT_PLACEHOLDER)
    }
}

/// `specialties_section` - heading texts for the specialties card/section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialtiesSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl SpecialtiesSection {
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(defaults::SPECIALTIES_TITLE)
    }

    pub fn display_subtitle(&self) -> &str {
        non_empty(&self.subtitle).unwrap_or(defaults::SPECIALTIES_SUBTITLE)
    }
}

/// `badge_gradient` - gradient class applied to highlighted text and badges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeGradient {
    pub gradient: Option<String>,
}

/// `hero_image` - optional custom portrait.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroImage {
    pub path: Option<String>,
}

/// One credential card embedded inline in `about_credentials`.
///
/// Follows the same active/order display convention as
/// [`crate::specialty::Specialty`]; `is_active` defaults to `true` when the
/// field is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Credential {
    pub title: String,
    pub subtitle: String,
    pub gradient: String,
    pub order: i32,
    pub is_active: bool,
}

impl Default for Credential {
    fn default() -> Self {
        Credential {
            title: String::new(),
            subtitle: String::new(),
            gradient: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

impl Credential {
    /// Active credentials in display order (stable on `order` ties).
    pub fn active_sorted(credentials: &[Credential]) -> Vec<Credential> {
        let mut active: Vec<Credential> = credentials
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|c| c.order);
        active
    }

    /// The hardcoded trio shown when no configured credential is active.
    pub fn fallback_set() -> Vec<Credential> {
        vec![
            Credential {
                title: "Centro Universitário Integrado".into(),
                subtitle: "Formação Acadêmica".into(),
                gradient: "from-pink-50 to-purple-50".into(),
                ..Credential::default()
            },
            Credential {
                title: "Terapia Cognitivo-Comportamental".into(),
                subtitle: "Abordagem Terapêutica".into(),
                gradient: "from-purple-50 to-indigo-50".into(),
                order: 1,
                ..Credential::default()
            },
            Credential {
                title: "Mais de 5 anos de experiência".into(),
                subtitle: "Experiência Profissional".into(),
                gradient: "from-green-50 to-teal-50".into(),
                order: 2,
                ..Credential::default()
            },
        ]
    }
}

pub fn general_info(configs: &[ConfigRecord]) -> GeneralInfo {
    typed_or_default(configs, keys::GENERAL_INFO)
}

pub fn professional_title(configs: &[ConfigRecord]) -> ProfessionalTitle {
    typed_or_default(configs, keys::PROFESSIONAL_TITLE)
}

pub fn about_section(configs: &[ConfigRecord]) -> AboutSection {
    typed_or_default(configs, keys::ABOUT_SECTION)
}

pub fn about_credentials(configs: &[ConfigRecord]) -> Vec<Credential> {
    typed_or_default(configs, keys::ABOUT_CREDENTIALS)
}

pub fn specialties_section(configs: &[ConfigRecord]) -> SpecialtiesSection {
    typed_or_default(configs, keys::SPECIALTIES_SECTION)
}

pub fn badge_gradient(configs: &[ConfigRecord]) -> Option<String> {
    let badge: BadgeGradient = typed_or_default(configs, keys::BADGE_GRADIENT);
    non_empty(&badge.gradient).map(str::to_owned)
}

pub fn hero_image(configs: &[ConfigRecord]) -> Option<String> {
    let image: HeroImage = typed_or_default(configs, keys::HERO_IMAGE);
    non_empty(&image.path).map(str::to_owned)
}

/// Treats `None` and `""` alike: both mean "fall back".
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(key: &str, value: Value) -> ConfigRecord {
        ConfigRecord {
            key: key.into(),
            value,
        }
    }

    #[test]
    fn missing_key_yields_defaults() {
        let configs: Vec<ConfigRecord> = vec![];
        let info = general_info(&configs);
        assert_eq!(info.display_name(), defaults::NAME);
        assert_eq!(info.display_crp(), defaults::CRP);
        assert_eq!(
            professional_title(&configs).display_title(),
            defaults::PROFESSIONAL_TITLE
        );
        assert_eq!(
            about_section(&configs).display_description(),
            defaults::ABOUT_PLACEHOLDER
        );
    }

    #[test]
    fn configured_values_win_over_defaults() {
        let configs = vec![
            record(keys::GENERAL_INFO, json!({"name": "Dra. (Maria)", "crp": "06/54321"})),
            record(keys::PROFESSIONAL_TITLE, json!({"title": "Neuropsicóloga"})),
        ];
        let info = general_info(&configs);
        assert_eq!(info.display_name(), "Dra. (Maria)");
        assert_eq!(info.display_crp(), "06/54321");
        assert_eq!(professional_title(&configs).display_title(), "Neuropsicóloga");
    }

    #[test]
    fn malformed_value_is_treated_as_empty() {
        let configs = vec![
            record(keys::GENERAL_INFO, json!("not an object")),
            record(keys::ABOUT_CREDENTIALS, json!({"also": "wrong shape"})),
        ];
        assert_eq!(general_info(&configs).display_name(), defaults::NAME);
        assert_eq!(about_credentials(&configs), Vec::new());
    }

    #[test]
    fn empty_string_falls_back_like_absence() {
        let configs = vec![record(keys::GENERAL_INFO, json!({"name": "  "}))];
        assert_eq!(general_info(&configs).display_name(), defaults::NAME);
    }

    #[test]
    fn credentials_follow_the_active_order_convention() {
        let credentials = vec![
            Credential {
                title: "b".into(),
                order: 2,
                ..Credential::default()
            },
            Credential {
                title: "hidden".into(),
                is_active: false,
                ..Credential::default()
            },
            Credential {
                title: "a".into(),
                order: 1,
                ..Credential::default()
            },
        ];
        let active = Credential::active_sorted(&credentials);
        let titles: Vec<&str> = active.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn credential_is_active_defaults_to_true() {
        let configs = vec![record(
            keys::ABOUT_CREDENTIALS,
            json!([{"title": "CFP", "subtitle": "Registro", "gradient": "", "order": 0}]),
        )];
        let active = Credential::active_sorted(&about_credentials(&configs));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "CFP");
    }

    #[test]
    fn badge_gradient_and_hero_image_are_optional() {
        let configs = vec![
            record(keys::BADGE_GRADIENT, json!({"gradient": "from-purple-500 to-pink-500"})),
            record(keys::HERO_IMAGE, json!({"path": "/uploads/hero.webp"})),
        ];
        assert_eq!(
            badge_gradient(&configs).as_deref(),
            Some("from-purple-500 to-pink-500")
        );
        assert_eq!(hero_image(&configs).as_deref(), Some("/uploads/hero.webp"));
        assert_eq!(badge_gradient(&[]), None);
        assert_eq!(hero_image(&[]), None);
    }
}
