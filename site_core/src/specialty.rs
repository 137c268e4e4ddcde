//! Specialty cards.
//!
//! Managed entirely by the admin backend; this side only reads and renders.
//! Display convention: active records only, ascending by `order`, ties kept
//! in source order.

use serde::{Deserialize, Serialize};

/// One practice specialty as served by `/api/specialties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Name reference into the icon catalog; unknown names fall back to the
    /// default icon at render time.
    #[serde(default)]
    pub icon: String,
    /// Author-chosen accent color, hex string.
    #[serde(default)]
    pub icon_color: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_active() -> bool {
    true
}

/// Active specialties in display order. `sort_by_key` is stable, so ties on
/// `order` preserve source order.
pub fn active_sorted(specialties: &[Specialty]) -> Vec<Specialty> {
    let mut active: Vec<Specialty> = specialties
        .iter()
        .filter(|s| s.is_active)
        .cloned()
        .collect();
    active.sort_by_key(|s| s.order);
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn specialty(id: i64, title: &str, is_active: bool, order: i32) -> Specialty {
        Specialty {
            id,
            title: title.into(),
            description: String::new(),
            icon: "Brain".into(),
            icon_color: "#8B5CF6".into(),
            is_active,
            order,
        }
    }

    #[test]
    fn inactive_records_never_appear() {
        let list = vec![
            specialty(1, "ansiedade", true, 1),
            specialty(2, "oculta", false, 0),
        ];
        let titles: Vec<String> = active_sorted(&list).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["ansiedade"]);
    }

    #[test]
    fn output_is_non_decreasing_by_order() {
        let list = vec![
            specialty(1, "c", true, 3),
            specialty(2, "a", true, 1),
            specialty(3, "b", true, 2),
        ];
        let orders: Vec<i32> = active_sorted(&list).into_iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn order_ties_preserve_source_order() {
        let list = vec![
            specialty(10, "primeira", true, 1),
            specialty(11, "segunda", true, 1),
            specialty(12, "terceira", true, 1),
        ];
        let ids: Vec<i64> = active_sorted(&list).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn wire_shape_is_camel_case_with_lenient_defaults() {
        let json = r#"{"id": 7, "title": "Luto", "description": "Acompanhamento"}"#;
        let parsed: Specialty = serde_json::from_str(json).unwrap();
        assert!(parsed.is_active);
        assert_eq!(parsed.order, 0);
        assert_eq!(parsed.icon, "");

        let json = r##"{"id": 8, "title": "TCC", "description": "", "iconColor": "#FF0000", "isActive": false, "order": 2}"##;
        let parsed: Specialty = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.icon_color, "#FF0000");
        assert!(!parsed.is_active);
    }
}
