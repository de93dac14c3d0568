//! Tooltip dialog – markup construction and the DOM side of insert / remove.
//!
//! Construction is a pure function of a [`TooltipConfig`] plus the resolved
//! body, so the exact markup the stylesheet depends on can be tested without
//! a browser.  Only the content relocation and insertion touch the DOM.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    CLOSE_BUTTON_CLASS_SUFFIX, CLOSE_BUTTON_ID, CLOSE_BUTTON_JS_CLASS, CLOSE_CONTENT_BACK_ATTR,
    CLOSE_FOCUS_BACK_ATTR, CLOSE_IMG_CLASS, CLOSE_TEXT_CLASS, CONTENT_CLASS_SUFFIX,
    DIALOG_CLASS_SUFFIX, DIALOG_ID, DIALOG_JS_CLASS, DIALOG_ROLE, RELOCATED_CONTENT_ID,
    TEXT_ONLY_WRAPPER_TAG, TITLE_CLASS_SUFFIX, TITLE_ID,
};
use crate::models::TooltipConfig;
use crate::utils::escape_attr;

/// Resolved body of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    /// Inline text, wrapped in a paragraph.
    Text(String),
    /// Inner markup moved out of the element with id `source_id`.
    Relocated { source_id: String, html: String },
    /// Nothing resolved (no text, content id missing from the page).
    Empty,
}

impl DialogBody {
    pub fn source_id(&self) -> Option<&str> {
        match self {
            DialogBody::Relocated { source_id, .. } => Some(source_id),
            _ => None,
        }
    }
}

/// Render the complete `<dialog>` markup.
///
/// `focus_back_id` is recorded on the close button so focus can be returned
/// there on close.
pub fn render_dialog(config: &TooltipConfig, focus_back_id: &str, body: &DialogBody) -> String {
    let prefix = &config.prefix_class;

    let close_inner = match &config.close_image_path {
        Some(path) => format!(
            r#"<img src="{}" alt="{}" class="{}" />"#,
            escape_attr(path),
            escape_attr(&config.close_text),
            CLOSE_IMG_CLASS
        ),
        None => format!(r#"<span class="{}">{}</span>"#, CLOSE_TEXT_CLASS, config.close_text),
    };

    let close_button = format!(
        r#"<button type="button" class="{js} {prefix}{suffix}" id="{id}" title="{title}" {back_attr}="{back}" {focus_attr}="{focus}">{inner}</button>"#,
        js = CLOSE_BUTTON_JS_CLASS,
        prefix = prefix,
        suffix = CLOSE_BUTTON_CLASS_SUFFIX,
        id = CLOSE_BUTTON_ID,
        title = escape_attr(&config.close_title),
        back_attr = CLOSE_CONTENT_BACK_ATTR,
        back = escape_attr(body.source_id().unwrap_or_default()),
        focus_attr = CLOSE_FOCUS_BACK_ATTR,
        focus = escape_attr(focus_back_id),
        inner = close_inner,
    );

    let title = match &config.title {
        Some(t) => format!(
            r#"<h1 id="{}" class="{}{}">{}</h1>"#,
            TITLE_ID, prefix, TITLE_CLASS_SUFFIX, t
        ),
        None => String::new(),
    };

    // No whitespace around relocated markup: close hands it back verbatim.
    let content = match body {
        DialogBody::Text(text) => format!("<{tag}>{}</{tag}>", text, tag = TEXT_ONLY_WRAPPER_TAG),
        DialogBody::Relocated { html, .. } => {
            format!(r#"<div id="{}">{}</div>"#, RELOCATED_CONTENT_ID, html)
        }
        DialogBody::Empty => String::new(),
    };

    let labelled_by = if config.title.is_some() {
        format!(r#" aria-labelledby="{}""#, TITLE_ID)
    } else {
        String::new()
    };

    format!(
        r#"<dialog id="{id}" class="{prefix}{suffix} {js}" role="{role}" open{labelled_by}><div role="document">{close_button}<div class="{prefix}{content_suffix}">{title}{content}</div></div></dialog>"#,
        id = DIALOG_ID,
        prefix = prefix,
        suffix = DIALOG_CLASS_SUFFIX,
        js = DIALOG_JS_CLASS,
        role = DIALOG_ROLE,
        labelled_by = labelled_by,
        close_button = close_button,
        content_suffix = CONTENT_CLASS_SUFFIX,
        title = title,
        content = content,
    )
}

/// Resolve the dialog body for `config`, relocating content when needed.
///
/// When the body comes from a content element its inner markup is taken and
/// the element is emptied, so ids inside it are never duplicated while the
/// dialog is open.
pub fn resolve_body(document: &Document, config: &TooltipConfig) -> DialogBody {
    if let Some(text) = &config.body_text {
        return DialogBody::Text(text.clone());
    }
    let Some(source_id) = config.effective_content_id() else {
        return DialogBody::Empty;
    };
    match document.get_element_by_id(source_id) {
        Some(source) => {
            let html = source.inner_html();
            source.set_inner_html("");
            DialogBody::Relocated { source_id: source_id.to_string(), html }
        }
        None => DialogBody::Empty,
    }
}

/// Insert the dialog markup directly after `trigger`.
pub fn insert_after(trigger: &Element, markup: &str) -> Result<(), JsValue> {
    trigger.insert_adjacent_html("afterend", markup)
}

/// Remove the open dialog from the page.
///
/// Returns the current inner markup of the relocated content block, if the
/// dialog has one, so the caller can hand it back to its source.
pub fn remove_dialog(document: &Document) -> Result<Option<String>, JsValue> {
    let Some(dialog) = document.get_element_by_id(DIALOG_ID) else {
        return Ok(None);
    };
    let content = dialog
        .query_selector(&format!("#{}", RELOCATED_CONTENT_ID))?
        .map(|el| el.inner_html());
    dialog.remove();
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TooltipConfig {
        TooltipConfig {
            prefix_class: "simple-".into(),
            close_text: "Close".into(),
            close_title: "Close tooltip".into(),
            ..TooltipConfig::default()
        }
    }

    #[test]
    fn text_body_markup_matches_stylesheet_contract() {
        let mut cfg = config();
        cfg.title = Some("Info".into());
        let html = render_dialog(&cfg, "label_tooltip1", &DialogBody::Text("Hello".into()));

        assert_eq!(
            html,
            concat!(
                r#"<dialog id="js-dialogtooltip" class="simple-tooltip js-dialogtooltip" role="dialog" open aria-labelledby="tooltip-title">"#,
                r#"<div role="document">"#,
                r#"<button type="button" class="js-tooltip-close simple-tooltip__close" id="js-tooltip-close" title="Close tooltip" data-content-back-id="" data-focus-back="label_tooltip1">"#,
                r#"<span class="modal-close__text">Close</span></button>"#,
                r#"<div class="simple-tooltip__content">"#,
                r#"<h1 id="tooltip-title" class="simple-tooltip__title">Info</h1><p>Hello</p>"#,
                r#"</div></div></dialog>"#
            )
        );
    }

    #[test]
    fn no_title_means_no_labelledby() {
        let html = render_dialog(&config(), "t", &DialogBody::Text("x".into()));
        assert!(!html.contains("aria-labelledby"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn relocated_body_is_wrapped_verbatim_and_back_referenced() {
        let body = DialogBody::Relocated {
            source_id: "help".into(),
            html: "<ul><li id=\"a\">one</li></ul>".into(),
        };
        let html = render_dialog(&config(), "t", &body);
        assert!(html.contains(r#"data-content-back-id="help""#));
        assert!(html.contains(r#"<div id="js-tooltip-content"><ul><li id="a">one</li></ul></div>"#));
    }

    #[test]
    fn close_image_replaces_text_label() {
        let mut cfg = config();
        cfg.close_image_path = Some("img/close.svg".into());
        let html = render_dialog(&cfg, "t", &DialogBody::Empty);
        assert!(html.contains(r#"<img src="img/close.svg" alt="Close" class="tooltip__closeimg" />"#));
        assert!(!html.contains(CLOSE_TEXT_CLASS));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut cfg = config();
        cfg.close_title = r#"say "bye""#.into();
        let html = render_dialog(&cfg, r#"x" onclick="y"#, &DialogBody::Empty);
        assert!(html.contains(r#"title="say &quot;bye&quot;""#));
        assert!(html.contains(r#"data-focus-back="x&quot; onclick=&quot;y""#));
    }

    #[test]
    fn unprefixed_config_emits_bare_suffixes() {
        let cfg = TooltipConfig::default();
        let html = render_dialog(&cfg, "t", &DialogBody::Empty);
        assert!(html.contains(r#"class="tooltip js-dialogtooltip""#));
        assert!(html.contains(r#"class="js-tooltip-close tooltip__close""#));
        assert!(html.contains(r#"<div class="tooltip__content"></div>"#));
    }
}
