//! Mount-point discovery in the host page
//!
//! The viewer binds to pre-existing containers identified by well-known
//! ids. When a required container is missing the viewer performs no work;
//! that is a normal outcome on pages without the widget, not an error.

use lazy_static::lazy_static;
use regex::Regex;

/// Well-known id of the list region container
pub const LIST_ID: &str = "news-list";
/// Well-known id of the detail region container
pub const DETAIL_ID: &str = "news-detail";
/// Optional layout wrapper mirroring detail visibility as a CSS class
pub const WRAPPER_ID: &str = "news-layout";

/// State class carried by the wrapper while the detail region is visible
pub const DETAIL_OPEN_CLASS: &str = "detail-open";

/// Resolved mount points of a host page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPoints {
    /// Whether the optional layout wrapper is present
    pub wrapper: bool,
}

impl MountPoints {
    /// Locate the viewer's containers in the host page markup.
    ///
    /// Returns `None` when either required container is missing.
    pub fn find(page_html: &str) -> Option<MountPoints> {
        if !has_element(page_html, LIST_ID) || !has_element(page_html, DETAIL_ID) {
            return None;
        }
        Some(MountPoints {
            wrapper: has_element(page_html, WRAPPER_ID),
        })
    }
}

fn has_element(html: &str, id: &str) -> bool {
    lazy_static! {
        static ref ID_ATTR: Regex = Regex::new(r#"id\s*=\s*["']([^"']+)["']"#).unwrap();
    }
    ID_ATTR.captures_iter(html).any(|c| &c[1] == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_both_containers() {
        let page = r#"<div id="news-list"></div><div id="news-detail"></div>"#;
        assert_eq!(MountPoints::find(page), Some(MountPoints { wrapper: false }));
    }

    #[test]
    fn test_find_with_wrapper() {
        let page = r#"<div id="news-layout"><div id="news-list"></div><div id="news-detail"></div></div>"#;
        assert_eq!(MountPoints::find(page), Some(MountPoints { wrapper: true }));
    }

    #[test]
    fn test_missing_container_means_no_mount() {
        assert_eq!(MountPoints::find(r#"<div id="news-list"></div>"#), None);
        assert_eq!(MountPoints::find(r#"<div id="news-detail"></div>"#), None);
        assert_eq!(MountPoints::find("<main>welcome</main>"), None);
    }

    #[test]
    fn test_single_quoted_and_spaced_attributes() {
        let page = r#"<div id = 'news-list'></div><section id='news-detail'></section>"#;
        assert!(MountPoints::find(page).is_some());
    }

    #[test]
    fn test_id_must_match_exactly() {
        let page = r#"<div id="news-list-extra"></div><div id="news-detail"></div>"#;
        assert_eq!(MountPoints::find(page), None);
    }
}
