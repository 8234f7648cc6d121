use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Static description of a broadcastable model type.
///
/// Two metas compare equal exactly when they describe the same model type,
/// which is how a broadcast decides between a record channel and a
/// collection channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelMeta {
    /// Application namespace, e.g. `blog`
    pub app_label: &'static str,
    /// Model type name, e.g. `comment`
    pub model_name: &'static str,
    /// Human-readable singular label
    pub verbose_name: &'static str,
    /// Human-readable plural label
    pub verbose_name_plural: &'static str,
}

impl ModelMeta {
    pub const fn new(
        app_label: &'static str,
        model_name: &'static str,
        verbose_name: &'static str,
        verbose_name_plural: &'static str,
    ) -> Self {
        Self {
            app_label,
            model_name,
            verbose_name,
            verbose_name_plural,
        }
    }

    /// `app_label.model_name`, lowercased
    pub fn label(&self) -> String {
        format!(
            "{}.{}",
            self.app_label.to_lowercase(),
            self.model_name.to_lowercase()
        )
    }

    /// Lowercased model name, used as the type-named context key
    pub fn context_key(&self) -> String {
        self.model_name.to_lowercase()
    }

    /// Template id derived from the model's metadata: `{app}/{model}.html`
    pub fn default_template(&self) -> String {
        format!(
            "{}/{}.html",
            self.app_label.to_lowercase(),
            self.model_name.to_lowercase()
        )
    }

    /// DOM id of a single record: `{label}_{pk}`
    #[track_caller]
    pub fn record_dom_id(&self, pk: Option<i64>) -> CoreErrorResult<String> {
        match pk {
            Some(pk) => Ok(format!("{}_{}", self.verbose_name.to_lowercase(), pk)),
            None => Err(CoreError::MissingPrimaryKey {
                label: self.label(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// DOM id of the collection shared by every record of this type
    pub fn collection_dom_id(&self) -> String {
        self.verbose_name_plural.to_lowercase()
    }
}

impl std::fmt::Display for ModelMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
