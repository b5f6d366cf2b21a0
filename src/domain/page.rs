//! Metadata exposed by the hosting page.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::ClickLogError;

/// Name of the meta element carrying the anti-forgery token.
///
/// Pages expose it as `<meta name="csrf-token" content="...">`.
pub const CSRF_META_NAME: &str = "csrf-token";

static META_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b([^>]*)>").unwrap());

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .unwrap()
});

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:(amp|lt|gt|quot|apos)|#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6}));").unwrap()
});

/// `<meta name=... content=...>` pairs of a page.
///
/// When a name appears more than once the first element wins, matching a
/// document-order selector lookup. A first element without `content` shadows
/// later ones and reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    entries: HashMap<String, Option<String>>,
}

impl PageMetadata {
    /// Creates empty page metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a meta entry unless the name is already present.
    pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.entries
            .entry(name.into())
            .or_insert_with(|| Some(content.into()));
        self
    }

    /// Collects every `<meta>` element that carries a `name`.
    ///
    /// Attribute order and quoting style do not matter. Character references
    /// in attribute values are decoded the way a browser's `getAttribute`
    /// returns them. Tags without a `name` (e.g. `charset` or `property`
    /// metas) are skipped.
    pub fn from_html(html: &str) -> Self {
        let mut page = Self::new();

        for tag in META_TAG_REGEX.captures_iter(html) {
            let mut name = None;
            let mut content = None;

            for attr in ATTRIBUTE_REGEX.captures_iter(&tag[1]) {
                let value = attr
                    .get(2)
                    .or_else(|| attr.get(3))
                    .or_else(|| attr.get(4))
                    .map(|m| decode_entities(m.as_str()));

                match attr[1].to_ascii_lowercase().as_str() {
                    "name" => name = value,
                    "content" => content = value,
                    _ => {}
                }
            }

            if let Some(name) = name {
                page.entries
                    .entry(name.into_owned())
                    .or_insert_with(|| content.map(Cow::into_owned));
            }
        }

        page
    }

    /// Returns the content of the named meta element.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.as_deref()
    }

    /// Looks up the CSRF token.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError::MissingCsrfToken`] if the page has no
    /// `csrf-token` meta element, or its first one has no `content`.
    pub fn csrf_token(&self) -> Result<&str, ClickLogError> {
        self.get(CSRF_META_NAME)
            .ok_or(ClickLogError::MissingCsrfToken(CSRF_META_NAME))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decodes named (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;`) and numeric
/// character references. Anything else is left as written.
fn decode_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }

    ENTITY_REGEX.replace_all(value, |caps: &Captures| {
        let decoded = if let Some(named) = caps.get(1) {
            match named.as_str() {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                _ => Some('\''),
            }
        } else if let Some(dec) = caps.get(2) {
            dec.as_str().parse().ok().and_then(char::from_u32)
        } else {
            caps.get(3)
                .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
                .and_then(char::from_u32)
        };

        decoded.map_or_else(|| caps[0].to_string(), String::from)
    })
}
