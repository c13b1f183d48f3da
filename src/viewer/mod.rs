//! News viewer - selectable card list with a detail panel
//!
//! The viewer is headless: it owns the single "active selection" and
//! produces the markup for the two coordinated page regions. One instance
//! is constructed per page mount and dropped with the page; there is no
//! module-level state.

mod fetch;
mod mount;
mod render;

pub use fetch::{fetch_posts, FetchError};
pub use mount::{MountPoints, DETAIL_ID, DETAIL_OPEN_CLASS, LIST_ID, WRAPPER_ID};
pub use render::render_body;

use serde::{Deserialize, Serialize};

use crate::content::{sort_newest_first, Post};

/// Placeholder shown when the document cannot be loaded
pub const UNAVAILABLE_PLACEHOLDER: &str = "Failed to load news posts.";
/// Placeholder shown when the document holds no records
pub const EMPTY_PLACEHOLDER: &str = "No news posts yet.";

/// Initial selection policy applied when the viewer mounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialSelection {
    /// Detail region stays hidden until the first activation
    None,
    /// First record in sort order is pre-selected
    #[default]
    First,
}

/// Viewer behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// What is selected right after mounting
    pub initial_selection: InitialSelection,
    /// Re-activating the active card clears the selection
    pub toggle_select: bool,
    /// Body renderer groups `- ` lines into bullet lists
    pub bullet_lists: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            initial_selection: InitialSelection::default(),
            toggle_select: false,
            bullet_lists: true,
        }
    }
}

/// Activation input; Enter and Space are contractually equivalent to a
/// pointer click, every other key is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Pointer,
    Key(&'a str),
}

impl Input<'_> {
    fn activates(&self) -> bool {
        match self {
            Input::Pointer => true,
            Input::Key(key) => matches!(*key, "Enter" | " "),
        }
    }
}

/// What the fetch produced
#[derive(Debug, Clone, PartialEq)]
enum Content {
    Posts(Vec<Post>),
    Empty,
    Unavailable,
}

/// A mounted news viewer instance
#[derive(Debug, Clone)]
pub struct Viewer {
    content: Content,
    active: Option<String>,
    options: ViewerOptions,
    mounts: MountPoints,
}

impl Viewer {
    /// Fetch the news document and mount a viewer into the host page.
    ///
    /// Returns `None` when the page has no news containers. Fetch and
    /// parse failures do not propagate; they mount the viewer in its
    /// placeholder state and log the detail.
    pub async fn init(page_html: &str, json_url: &str, options: ViewerOptions) -> Option<Viewer> {
        let mounts = MountPoints::find(page_html)?;

        let viewer = match fetch::fetch_posts(json_url).await {
            Ok(posts) => Viewer::with_posts(posts, options, mounts),
            Err(e) => {
                tracing::error!("Failed to load news document from {}: {}", json_url, e);
                Viewer::unavailable(options, mounts)
            }
        };

        Some(viewer)
    }

    /// Build a viewer over an already-loaded collection
    pub fn with_posts(mut posts: Vec<Post>, options: ViewerOptions, mounts: MountPoints) -> Viewer {
        sort_newest_first(&mut posts);

        let content = if posts.is_empty() {
            Content::Empty
        } else {
            Content::Posts(posts)
        };

        let mut viewer = Viewer {
            content,
            active: None,
            options,
            mounts,
        };

        if options.initial_selection == InitialSelection::First {
            if let Content::Posts(posts) = &viewer.content {
                viewer.active = Some(posts[0].slug.clone());
            }
        }

        viewer
    }

    /// Build a viewer in the fetch-failed placeholder state
    pub fn unavailable(options: ViewerOptions, mounts: MountPoints) -> Viewer {
        Viewer {
            content: Content::Unavailable,
            active: None,
            options,
            mounts,
        }
    }

    /// Handle an activation event on the card bound to `slug`.
    ///
    /// Cards resolve by key, never by position. An unknown slug (a stale
    /// card after a re-render, say) is a no-op.
    pub fn activate(&mut self, slug: &str, input: Input<'_>) {
        if !input.activates() {
            return;
        }

        let Content::Posts(posts) = &self.content else {
            return;
        };
        if !posts.iter().any(|p| p.slug == slug) {
            tracing::debug!("Ignoring activation for unknown slug '{}'", slug);
            return;
        }

        if self.options.toggle_select && self.active.as_deref() == Some(slug) {
            self.active = None;
        } else {
            self.active = Some(slug.to_string());
        }
    }

    /// Slug of the active selection, if any
    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The records behind the list, in display order
    pub fn posts(&self) -> &[Post] {
        match &self.content {
            Content::Posts(posts) => posts,
            _ => &[],
        }
    }

    /// Markup for the list region
    pub fn list_html(&self) -> String {
        match &self.content {
            Content::Posts(posts) => posts
                .iter()
                .map(|p| render::render_card(p, self.active.as_deref() == Some(p.slug.as_str())))
                .collect(),
            Content::Empty => placeholder(EMPTY_PLACEHOLDER),
            Content::Unavailable => placeholder(UNAVAILABLE_PLACEHOLDER),
        }
    }

    /// Markup for the detail region; empty while nothing is selected
    pub fn detail_html(&self) -> String {
        self.active_post()
            .map(|p| render::render_detail(p, self.options.bullet_lists))
            .unwrap_or_default()
    }

    /// Whether the detail region should be shown
    pub fn detail_visible(&self) -> bool {
        self.active_post().is_some()
    }

    /// CSS state class for the optional layout wrapper
    pub fn wrapper_class(&self) -> Option<&'static str> {
        (self.mounts.wrapper && self.detail_visible()).then_some(DETAIL_OPEN_CLASS)
    }

    fn active_post(&self) -> Option<&Post> {
        let slug = self.active.as_deref()?;
        match &self.content {
            Content::Posts(posts) => posts.iter().find(|p| p.slug == slug),
            _ => None,
        }
    }
}

fn placeholder(text: &str) -> String {
    format!(r#"<p class="news-empty">{}</p>"#, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNTS: MountPoints = MountPoints { wrapper: false };
    const WRAPPED: MountPoints = MountPoints { wrapper: true };

    fn sample_posts() -> Vec<Post> {
        ["first", "second", "third"]
            .iter()
            .enumerate()
            .map(|(i, slug)| Post {
                title: Some(format!("Post {}", i + 1)),
                date: Some(format!("2024-03-0{}", 3 - i)),
                body: Some(format!("Body of {}.", slug)),
                ..Post::new(*slug)
            })
            .collect()
    }

    fn options(initial: InitialSelection, toggle: bool) -> ViewerOptions {
        ViewerOptions {
            initial_selection: initial,
            toggle_select: toggle,
            ..ViewerOptions::default()
        }
    }

    #[test]
    fn test_initial_selection_first() {
        let viewer = Viewer::with_posts(sample_posts(), ViewerOptions::default(), MOUNTS);
        assert_eq!(viewer.active_slug(), Some("first"));
        assert!(viewer.detail_visible());
        assert!(viewer.detail_html().contains("Post 1"));
    }

    #[test]
    fn test_initial_selection_none() {
        let viewer = Viewer::with_posts(
            sample_posts(),
            options(InitialSelection::None, false),
            MOUNTS,
        );
        assert_eq!(viewer.active_slug(), None);
        assert!(!viewer.detail_visible());
        assert_eq!(viewer.detail_html(), "");
    }

    #[test]
    fn test_exactly_one_card_active() {
        let mut viewer = Viewer::with_posts(
            sample_posts(),
            options(InitialSelection::None, false),
            MOUNTS,
        );

        viewer.activate("second", Input::Pointer);
        viewer.activate("third", Input::Pointer);

        assert_eq!(viewer.active_slug(), Some("third"));
        let list = viewer.list_html();
        assert_eq!(list.matches("news-card active").count(), 1);
        assert!(viewer.detail_html().contains("Body of third."));
    }

    #[test]
    fn test_toggle_clears_selection() {
        let mut viewer = Viewer::with_posts(
            sample_posts(),
            options(InitialSelection::None, true),
            MOUNTS,
        );

        viewer.activate("second", Input::Pointer);
        assert!(viewer.detail_visible());

        viewer.activate("second", Input::Pointer);
        assert_eq!(viewer.active_slug(), None);
        assert!(!viewer.detail_visible());
        assert_eq!(viewer.detail_html(), "");
    }

    #[test]
    fn test_without_toggle_reactivation_keeps_selection() {
        let mut viewer = Viewer::with_posts(sample_posts(), ViewerOptions::default(), MOUNTS);

        viewer.activate("first", Input::Pointer);
        assert_eq!(viewer.active_slug(), Some("first"));
        assert!(viewer.detail_visible());
    }

    #[test]
    fn test_keyboard_equivalence() {
        let mut viewer = Viewer::with_posts(
            sample_posts(),
            options(InitialSelection::None, false),
            MOUNTS,
        );

        viewer.activate("second", Input::Key("Enter"));
        assert_eq!(viewer.active_slug(), Some("second"));

        viewer.activate("third", Input::Key(" "));
        assert_eq!(viewer.active_slug(), Some("third"));

        // any other key is inert
        viewer.activate("first", Input::Key("Tab"));
        viewer.activate("first", Input::Key("a"));
        assert_eq!(viewer.active_slug(), Some("third"));
    }

    #[test]
    fn test_unknown_slug_is_a_no_op() {
        let mut viewer = Viewer::with_posts(sample_posts(), ViewerOptions::default(), MOUNTS);
        viewer.activate("missing", Input::Pointer);
        assert_eq!(viewer.active_slug(), Some("first"));
    }

    #[test]
    fn test_empty_collection_placeholder() {
        let viewer = Viewer::with_posts(Vec::new(), ViewerOptions::default(), MOUNTS);
        assert!(viewer.list_html().contains(EMPTY_PLACEHOLDER));
        assert!(!viewer.detail_visible());
        assert_eq!(viewer.detail_html(), "");
    }

    #[test]
    fn test_unavailable_placeholder() {
        let mut viewer = Viewer::unavailable(ViewerOptions::default(), MOUNTS);
        assert!(viewer.list_html().contains(UNAVAILABLE_PLACEHOLDER));
        assert!(!viewer.detail_visible());

        // activations while unavailable change nothing
        viewer.activate("first", Input::Pointer);
        assert_eq!(viewer.active_slug(), None);
    }

    #[test]
    fn test_cards_follow_sort_order() {
        let viewer = Viewer::with_posts(sample_posts(), ViewerOptions::default(), MOUNTS);
        let order: Vec<_> = viewer.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_wrapper_class_follows_visibility() {
        let mut viewer = Viewer::with_posts(
            sample_posts(),
            options(InitialSelection::None, true),
            WRAPPED,
        );
        assert_eq!(viewer.wrapper_class(), None);

        viewer.activate("first", Input::Pointer);
        assert_eq!(viewer.wrapper_class(), Some(DETAIL_OPEN_CLASS));

        viewer.activate("first", Input::Pointer);
        assert_eq!(viewer.wrapper_class(), None);
    }

    #[test]
    fn test_no_wrapper_no_class() {
        let viewer = Viewer::with_posts(sample_posts(), ViewerOptions::default(), MOUNTS);
        assert!(viewer.detail_visible());
        assert_eq!(viewer.wrapper_class(), None);
    }

    #[tokio::test]
    async fn test_init_without_containers_does_nothing() {
        let viewer = Viewer::init(
            "<main>no widget here</main>",
            "http://127.0.0.1:9/news.json",
            ViewerOptions::default(),
        )
        .await;
        assert!(viewer.is_none());
    }
}
