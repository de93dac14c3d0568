// Markup contract shared with the page and its stylesheet.  Class names,
// attribute names and ids below must stay byte-for-byte stable – external CSS
// and existing page markup depend on them.

// Trigger discovery / identification
pub const DEFAULT_MARKER_CLASS: &str = "js-tooltip";
pub const DEFAULT_ID_PREFIX: &str = "label_tooltip";
pub const DEFAULT_WRAPPER_TAG: &str = "span";
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";
pub const WRAPPER_CLASS_SUFFIX: &str = "container";
pub const ATTACHED_MARKER_ATTR: &str = "data-tooltip-attached";

/// Length of the random part of a generated trigger id.
pub const RANDOM_ID_LEN: usize = 10;

// Data attributes read from a trigger
pub const ATTR_PREFIX_CLASS: &str = "data-tooltip-prefix-class";
pub const ATTR_TEXT: &str = "data-tooltip-text";
pub const ATTR_CONTENT_ID: &str = "data-tooltip-content-id";
pub const ATTR_TITLE: &str = "data-tooltip-title";
pub const ATTR_CLOSE_TEXT: &str = "data-tooltip-close-text";
pub const ATTR_CLOSE_TITLE: &str = "data-tooltip-close-title";
pub const ATTR_CLOSE_IMG: &str = "data-tooltip-close-img";
pub const ATTR_FOCUS_REDIRECT: &str = "data-tooltip-focus-toid";

// Generated dialog
pub const DIALOG_ID: &str = "js-dialogtooltip";
pub const DIALOG_JS_CLASS: &str = "js-dialogtooltip";
pub const DIALOG_ROLE: &str = "dialog";
pub const DIALOG_CLASS_SUFFIX: &str = "tooltip";

pub const CLOSE_BUTTON_ID: &str = "js-tooltip-close";
pub const CLOSE_BUTTON_JS_CLASS: &str = "js-tooltip-close";
pub const CLOSE_BUTTON_CLASS_SUFFIX: &str = "tooltip__close";
pub const CLOSE_CONTENT_BACK_ATTR: &str = "data-content-back-id";
pub const CLOSE_FOCUS_BACK_ATTR: &str = "data-focus-back";
// Emitted without the prefix.
pub const CLOSE_IMG_CLASS: &str = "tooltip__closeimg";
pub const CLOSE_TEXT_CLASS: &str = "modal-close__text";

pub const CONTENT_CLASS_SUFFIX: &str = "tooltip__content";
pub const RELOCATED_CONTENT_ID: &str = "js-tooltip-content";
pub const TEXT_ONLY_WRAPPER_TAG: &str = "p";

pub const TITLE_ID: &str = "tooltip-title";
pub const TITLE_CLASS_SUFFIX: &str = "tooltip__title";

pub const FOCUSABLE_ELEMENTS: &str = "a[href], area[href], input:not([disabled]), select:not([disabled]), textarea:not([disabled]), button:not([disabled]), iframe, object, embed, *[tabindex], *[contenteditable]";

// Bootstrap
pub const GLOBAL_ENTRY_NAME: &str = "van11yAccessibleModalTooltipAria";
pub const INLINE_CONFIG_ID: &str = "js-tooltip-config";
