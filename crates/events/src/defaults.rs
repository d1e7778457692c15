//! Pipeline defaults applied while merging GHES overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use auditlog_core::{CatalogResult, Plan};

/// Environment variable holding comma-separated fallback field names.
pub const DEFAULT_FIELDS_ENV: &str = "AUDITLOG_DEFAULT_FIELDS";

/// Fallback values used when neither an event nor its override provides one.
///
/// Everything defaults to empty, which keeps merged events exactly as the
/// catalog describes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineDefaults {
    /// Fields used when both the base event and the override omit `fields`.
    pub fields: Vec<String>,

    /// Description used when both the base event and the override leave it empty.
    pub description: Option<String>,

    /// Text appended to every merged description rendered on a given page.
    pub appended_descriptions: BTreeMap<Plan, String>,
}

impl PipelineDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build defaults from the process environment.
    ///
    /// Unset or blank variables yield empty defaults.
    pub fn from_env() -> Self {
        let fields = std::env::var(DEFAULT_FIELDS_ENV)
            .map(|raw| parse_field_list(&raw))
            .unwrap_or_default();

        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_appended_description(mut self, page: impl Into<Plan>, text: impl Into<String>) -> Self {
        self.appended_descriptions.insert(page.into(), text.into());
        self
    }

    pub fn appended_description(&self, page: &Plan) -> Option<&str> {
        self.appended_descriptions
            .get(page)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}

fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_default() {
        let defaults = PipelineDefaults::from_json("{}").unwrap();
        assert_eq!(defaults, PipelineDefaults::default());
    }

    #[test]
    fn parses_partial_config() {
        let defaults = PipelineDefaults::from_json(
            r#"{ "fields": ["actor", "created_at"], "appended_descriptions": { "enterprise": "See the enterprise guide." } }"#,
        )
        .unwrap();

        assert_eq!(defaults.fields, vec!["actor", "created_at"]);
        assert_eq!(
            defaults.appended_description(&Plan::enterprise()),
            Some("See the enterprise guide.")
        );
        assert_eq!(defaults.appended_description(&Plan::user()), None);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = PipelineDefaults::from_json(r#"{ "fields": "actor" }"#).unwrap_err();
        assert!(matches!(err, auditlog_core::CatalogError::Parse(_)));
    }

    #[test]
    fn field_list_skips_blanks() {
        assert_eq!(parse_field_list(" actor, ,created_at,"), vec!["actor", "created_at"]);
        assert!(parse_field_list("").is_empty());
    }
}
