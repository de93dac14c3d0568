use std::fmt;

use web_sys::Element;

use crate::constants::{
    ATTR_CLOSE_IMG, ATTR_CLOSE_TEXT, ATTR_CLOSE_TITLE, ATTR_CONTENT_ID, ATTR_FOCUS_REDIRECT,
    ATTR_PREFIX_CLASS, ATTR_TEXT, ATTR_TITLE,
};

/// Typed view of the `data-tooltip-*` attributes carried by one trigger.
///
/// Empty attribute values are treated like missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipConfig {
    /// Class prefix for generated markup, already suffixed with `-`, or empty.
    pub prefix_class: String,
    pub body_text: Option<String>,
    /// Id of an element whose inner markup is moved into the dialog.
    pub content_source_id: Option<String>,
    pub title: Option<String>,
    pub close_text: String,
    /// Falls back to `close_text` when the trigger does not set one.
    pub close_title: String,
    pub close_image_path: Option<String>,
    /// Element focused on open instead of the close button.
    pub focus_redirect_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Neither inline text nor a content id: the dialog body will be empty.
    NoBody,
    /// Both are set; the inline text wins and the content id is ignored.
    TextShadowsContentId,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NoBody => write!(
                f,
                "neither {} nor {} is set, the tooltip body will be empty",
                ATTR_TEXT, ATTR_CONTENT_ID
            ),
            ConfigWarning::TextShadowsContentId => {
                write!(f, "{} is ignored because {} is set", ATTR_CONTENT_ID, ATTR_TEXT)
            }
        }
    }
}

impl TooltipConfig {
    /// Build the config from an attribute lookup.  Kept generic so the
    /// parsing rules can be exercised without a DOM.
    pub fn from_attributes<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| get(name).filter(|v| !v.is_empty());

        // The prefix attribute counts even when empty: it then yields "-".
        let prefix_class = get(ATTR_PREFIX_CLASS)
            .map(|p| format!("{}-", p))
            .unwrap_or_default();
        let close_text = get(ATTR_CLOSE_TEXT).unwrap_or_default();
        let close_title = get(ATTR_CLOSE_TITLE).unwrap_or_else(|| close_text.clone());

        Self {
            prefix_class,
            body_text: non_empty(ATTR_TEXT),
            content_source_id: non_empty(ATTR_CONTENT_ID),
            title: non_empty(ATTR_TITLE),
            close_text,
            close_title,
            close_image_path: non_empty(ATTR_CLOSE_IMG),
            focus_redirect_id: non_empty(ATTR_FOCUS_REDIRECT),
        }
    }

    pub fn from_element(el: &Element) -> Self {
        Self::from_attributes(|name| el.get_attribute(name))
    }

    /// Content id that will actually be used for the body, if any.
    pub fn effective_content_id(&self) -> Option<&str> {
        match self.body_text {
            Some(_) => None,
            None => self.content_source_id.as_deref(),
        }
    }

    pub fn warnings(&self) -> Vec<ConfigWarning> {
        match (&self.body_text, &self.content_source_id) {
            (None, None) => vec![ConfigWarning::NoBody],
            (Some(_), Some(_)) => vec![ConfigWarning::TextShadowsContentId],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(attrs: &[(&str, &str)]) -> TooltipConfig {
        let map: HashMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TooltipConfig::from_attributes(|name| map.get(name).cloned())
    }

    #[test]
    fn bare_trigger_parses_to_defaults_with_warning() {
        let cfg = parse(&[]);
        assert_eq!(cfg, TooltipConfig::default());
        assert_eq!(cfg.warnings(), vec![ConfigWarning::NoBody]);
    }

    #[test]
    fn reads_every_attribute() {
        let cfg = parse(&[
            (ATTR_PREFIX_CLASS, "minimalist"),
            (ATTR_TEXT, "Hello"),
            (ATTR_TITLE, "Heads up"),
            (ATTR_CLOSE_TEXT, "Close"),
            (ATTR_CLOSE_TITLE, "Close this"),
            (ATTR_CLOSE_IMG, "close.svg"),
            (ATTR_FOCUS_REDIRECT, "field-1"),
        ]);
        assert_eq!(cfg.prefix_class, "minimalist-");
        assert_eq!(cfg.body_text.as_deref(), Some("Hello"));
        assert_eq!(cfg.title.as_deref(), Some("Heads up"));
        assert_eq!(cfg.close_text, "Close");
        assert_eq!(cfg.close_title, "Close this");
        assert_eq!(cfg.close_image_path.as_deref(), Some("close.svg"));
        assert_eq!(cfg.focus_redirect_id.as_deref(), Some("field-1"));
        assert!(cfg.warnings().is_empty());
    }

    #[test]
    fn close_title_defaults_to_close_text() {
        let cfg = parse(&[(ATTR_CLOSE_TEXT, "Dismiss"), (ATTR_TEXT, "x")]);
        assert_eq!(cfg.close_title, "Dismiss");

        let cfg = parse(&[(ATTR_CLOSE_TEXT, "Dismiss"), (ATTR_CLOSE_TITLE, "")]);
        assert_eq!(cfg.close_title, "", "explicit empty title is kept");
    }

    #[test]
    fn inline_text_takes_precedence_over_content_id() {
        let cfg = parse(&[(ATTR_TEXT, "inline"), (ATTR_CONTENT_ID, "src")]);
        assert_eq!(cfg.effective_content_id(), None);
        assert_eq!(cfg.warnings(), vec![ConfigWarning::TextShadowsContentId]);

        let cfg = parse(&[(ATTR_TEXT, ""), (ATTR_CONTENT_ID, "src")]);
        assert_eq!(cfg.body_text, None);
        assert_eq!(cfg.effective_content_id(), Some("src"));
    }
}
