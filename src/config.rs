//! Controller-wide configuration.
//!
//! Every field has a default matching the stock markup contract, so pages
//! only need to supply what they want to change.  Values come from three
//! places, later ones winning:
//!
//! 1. `ControllerConfig::default()`
//! 2. an inline `<script type="application/json" id="js-tooltip-config">`
//!    block, read once at bootstrap
//! 3. the exported `configure(options)` function

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{
    DEFAULT_ACTIVE_CLASS, DEFAULT_ID_PREFIX, DEFAULT_MARKER_CLASS, DEFAULT_WRAPPER_TAG,
    INLINE_CONFIG_ID,
};

/// How `attach` names the triggers it discovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// Prefix + 10 random base-32 characters.  Best effort uniqueness.
    #[default]
    Random,
    /// Prefix + 1-based counter that keeps counting across attach calls.
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ControllerConfig {
    /// Class selecting an element as a tooltip trigger.
    pub marker_class: String,
    pub id_prefix: String,
    /// Class carried by a trigger while its dialog is open.
    pub active_class: String,
    /// Tag of the container wrapped around each trigger.
    pub wrapper_tag: String,
    pub id_scheme: IdScheme,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            wrapper_tag: DEFAULT_WRAPPER_TAG.to_string(),
            id_scheme: IdScheme::Random,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document (the inline config block).
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid tooltip config JSON: {}", e))?;
        config.validated()
    }

    /// Convert a plain JS object handed to `configure()`.
    pub fn from_js(options: JsValue) -> Result<Self, String> {
        let config: Self = serde_wasm_bindgen::from_value(options)
            .map_err(|e| format!("Invalid tooltip config object: {}", e))?;
        config.validated()
    }

    /// Read the inline config block if the page provides one.
    ///
    /// `Ok(None)` when the block is absent.
    pub fn from_document(document: &Document) -> Result<Option<Self>, String> {
        let Some(el) = document.get_element_by_id(INLINE_CONFIG_ID) else {
            return Ok(None);
        };
        let json = el.text_content().unwrap_or_default();
        Self::from_json(&json).map(Some)
    }

    fn validated(self) -> Result<Self, String> {
        if self.marker_class.trim().is_empty() || self.marker_class.contains(char::is_whitespace) {
            return Err(format!("markerClass must be a single class name, got '{}'", self.marker_class));
        }
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(format!("activeClass must be a single class name, got '{}'", self.active_class));
        }
        if self.wrapper_tag.is_empty() || !self.wrapper_tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("wrapperTag must be a plain tag name, got '{}'", self.wrapper_tag));
        }
        Ok(self)
    }

    /// CSS selector matching every trigger.
    pub fn trigger_selector(&self) -> String {
        format!(".{}", self.marker_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ControllerConfig::default());
        assert_eq!(cfg.trigger_selector(), ".js-tooltip");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = ControllerConfig::from_json(r#"{"idScheme":"sequential","activeClass":"open"}"#).unwrap();
        assert_eq!(cfg.id_scheme, IdScheme::Sequential);
        assert_eq!(cfg.active_class, "open");
        assert_eq!(cfg.marker_class, DEFAULT_MARKER_CLASS);
        assert_eq!(cfg.wrapper_tag, DEFAULT_WRAPPER_TAG);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(ControllerConfig::from_json(r#"{"markerClas":"x"}"#).is_err());
        assert!(ControllerConfig::from_json(r#"{"markerClass":"two words"}"#).is_err());
        assert!(ControllerConfig::from_json(r#"{"wrapperTag":"<span>"}"#).is_err());
        assert!(ControllerConfig::from_json(r#"{"idScheme":"uuid"}"#).is_err());
        assert!(ControllerConfig::from_json("not json").is_err());
    }
}
