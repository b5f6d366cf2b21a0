//! Click event model for link click reporting.

use url::Url;

/// An interaction on an anchor element.
///
/// Carries the resolved destination URL of the anchor that was clicked,
/// the way a browser exposes `anchor.href` after resolving it against the
/// document URL.
///
/// # Usage Flow
///
/// 1. Created by the host when an anchor is clicked
/// 2. Passed to [`crate::application::services::ClickLogger::log_click`]
/// 3. Converted to a [`crate::domain::ClickEventReport`] together with the page token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target_href: String,
}

impl ClickEvent {
    /// Creates a click event for an already-resolved destination URL.
    ///
    /// The URL is taken as-is. No shape or scheme checks are made.
    pub fn new(target_href: impl Into<String>) -> Self {
        Self {
            target_href: target_href.into(),
        }
    }

    /// Creates a click event from an anchor's raw `href` attribute.
    ///
    /// Relative references are resolved against `page_url`. If resolution
    /// fails the raw attribute value is kept verbatim.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let page = Url::parse("https://mags.example.com/search")?;
    /// let event = ClickEvent::from_anchor(&page, "/issues/1987/3");
    /// assert_eq!(event.target_href, "https://mags.example.com/issues/1987/3");
    /// ```
    pub fn from_anchor(page_url: &Url, href: &str) -> Self {
        let target_href = page_url
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string());

        Self { target_href }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://mags.example.com/search/results?q=radio").unwrap()
    }

    #[test]
    fn test_new_keeps_url_verbatim() {
        let event = ClickEvent::new("https://example.com");
        assert_eq!(event.target_href, "https://example.com");
    }

    #[test]
    fn test_new_does_not_validate() {
        let event = ClickEvent::new("javascript:void(0)");
        assert_eq!(event.target_href, "javascript:void(0)");
    }

    #[test]
    fn test_from_anchor_absolute_href() {
        let event = ClickEvent::from_anchor(&page(), "https://google.com/");
        assert_eq!(event.target_href, "https://google.com/");
    }

    #[test]
    fn test_from_anchor_root_relative_href() {
        let event = ClickEvent::from_anchor(&page(), "/magazines/12");
        assert_eq!(event.target_href, "https://mags.example.com/magazines/12");
    }

    #[test]
    fn test_from_anchor_path_relative_href() {
        let event = ClickEvent::from_anchor(&page(), "page2");
        assert_eq!(event.target_href, "https://mags.example.com/search/page2");
    }

    #[test]
    fn test_from_anchor_unresolvable_href_falls_back() {
        let event = ClickEvent::from_anchor(&page(), "http://[::1");
        assert_eq!(event.target_href, "http://[::1");
    }
}
