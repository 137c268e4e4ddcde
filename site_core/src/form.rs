//! The admin "about texts" form model.
//!
//! The form reads its defaults out of the current config, validates every
//! field as required, and writes back through three independent
//! `POST /api/admin/config` upserts - one per logical key. The writes are
//! deliberately not transactional (see DESIGN.md); the plan carries the
//! logical field alongside each payload so a mid-burst failure can name
//! what did not get saved.

use serde_json::{Value, json};
use thiserror::Error;

use crate::config::{self, ConfigRecord, defaults, keys};

/// The logical fields the form edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    ProfessionalTitle,
    Description,
}

impl Field {
    /// Operator-facing label, used in failure notices.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::ProfessionalTitle => "título profissional",
            Field::Description => "descrição",
        }
    }
}

/// Per-field validation failure. Messages match the admin panel copy.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Título profissional é obrigatório")]
    TitleRequired,
    #[error("Descrição é obrigatória")]
    DescriptionRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::TitleRequired => Field::ProfessionalTitle,
            FieldError::DescriptionRequired => Field::Description,
        }
    }
}

/// One pending config write: the key, its new value, and which logical
/// field it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigUpdate {
    pub field: Field,
    pub key: &'static str,
    pub value: Value,
}

/// The editable texts of the about section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutTexts {
    pub name: String,
    pub professional_title: String,
    pub description: String,
}

impl AboutTexts {
    /// Current server-side values with the documented defaults filled in.
    ///
    /// The title falls back through `professional_title.title`, then the
    /// legacy `general_info.professionalTitle`, then the hardcoded default.
    pub fn from_configs(configs: &[ConfigRecord]) -> Self {
        let general = config::general_info(configs);
        let title = config::professional_title(configs);
        let about = config::about_section(configs);

        let professional_title = title
            .title
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(general
                .professional_title
                .as_deref()
                .filter(|s| !s.trim().is_empty()))
            .unwrap_or(defaults::PROFESSIONAL_TITLE)
            .to_owned();

        AboutTexts {
            name: general.display_name().to_owned(),
            professional_title,
            description: about
                .description
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults::ABOUT_DESCRIPTION)
                .to_owned(),
        }
    }

    /// Every field is required; whitespace-only input counts as empty.
    /// All failures are reported at once so the operator sees each field's
    /// message.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if self.professional_title.trim().is_empty() {
            errors.push(FieldError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::DescriptionRequired);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// The write plan: one upsert per logical key, in submission order.
    pub fn updates(&self) -> Vec<ConfigUpdate> {
        vec![
            ConfigUpdate {
                field: Field::Name,
                key: keys::GENERAL_INFO,
                value: json!({ "name": self.name }),
            },
            ConfigUpdate {
                field: Field::ProfessionalTitle,
                key: keys::PROFESSIONAL_TITLE,
                value: json!({ "title": self.professional_title }),
            },
            ConfigUpdate {
                field: Field::Description,
                key: keys::ABOUT_SECTION,
                value: json!({ "description": self.description }),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Mirrors the server's upsert-by-key convention.
    fn apply(configs: &mut Vec<ConfigRecord>, update: ConfigUpdate) {
        match configs.iter_mut().find(|c| c.key == update.key) {
            Some(record) => record.value = update.value,
            None => configs.push(ConfigRecord {
                key: update.key.into(),
                value: update.value,
            }),
        }
    }

    #[test]
    fn defaults_when_nothing_was_ever_saved() {
        let texts = AboutTexts::from_configs(&[]);
        assert_eq!(texts.name, defaults::NAME);
        assert_eq!(texts.professional_title, defaults::PROFESSIONAL_TITLE);
        assert_eq!(texts.description, defaults::ABOUT_DESCRIPTION);
    }

    #[test]
    fn title_falls_back_through_the_legacy_general_info_field() {
        let configs = vec![ConfigRecord {
            key: keys::GENERAL_INFO.into(),
            value: json!({ "professionalTitle": "Psicanalista" }),
        }];
        assert_eq!(
            AboutTexts::from_configs(&configs).professional_title,
            "Psicanalista"
        );
    }

    #[test]
    fn every_field_is_required() {
        let texts = AboutTexts {
            name: "  ".into(),
            professional_title: String::new(),
            description: "ok".into(),
        };
        let errors = texts.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::NameRequired, FieldError::TitleRequired]
        );
        assert_eq!(errors[0].to_string(), "Nome é obrigatório");
    }

    #[test]
    fn filled_form_passes_validation() {
        let texts = AboutTexts {
            name: "Dra. (Maria)".into(),
            professional_title: "Psicóloga".into(),
            description: "Atendimento humanizado.".into(),
        };
        assert_eq!(texts.validate(), Ok(()));
    }

    #[test]
    fn write_plan_touches_one_key_per_field() {
        let texts = AboutTexts {
            name: "X".into(),
            professional_title: "T".into(),
            description: "D".into(),
        };
        let updates = texts.updates();
        let touched: Vec<&str> = updates.iter().map(|u| u.key).collect();
        assert_eq!(
            touched,
            vec![
                keys::GENERAL_INFO,
                keys::PROFESSIONAL_TITLE,
                keys::ABOUT_SECTION
            ]
        );
        assert_eq!(updates[0].value, json!({ "name": "X" }));
        assert_eq!(updates[2].field, Field::Description);
    }

    #[test]
    fn write_then_read_round_trips() {
        let texts = AboutTexts {
            name: "X".into(),
            professional_title: "Terapeuta".into(),
            description: "Nova descrição".into(),
        };
        let mut configs = vec![ConfigRecord {
            key: keys::GENERAL_INFO.into(),
            value: json!({ "name": "antiga" }),
        }];
        for update in texts.updates() {
            apply(&mut configs, update);
        }
        assert_eq!(config::general_info(&configs).display_name(), "X");
        assert_eq!(AboutTexts::from_configs(&configs), texts);
    }
}
