//! Preview the rendered viewer regions in the terminal

use anyhow::Result;

use crate::viewer::{Input, Viewer};
use crate::Newsbox;

/// Host page stand-in with all containers mounted
const PREVIEW_PAGE: &str = r#"<div id="news-layout"><div id="news-list"></div><div id="news-detail"></div></div>"#;

/// Fetch the news document and print the markup of both regions.
///
/// This exercises the full viewer pipeline the way a page load does:
/// fetch, mount, initial selection, render.
pub async fn run(app: &Newsbox, url: Option<&str>, select: Option<&str>) -> Result<()> {
    let url = match url {
        Some(url) => url.to_string(),
        None => format!("http://localhost:4000{}", app.config.json_path),
    };

    let Some(mut viewer) = Viewer::init(PREVIEW_PAGE, &url, app.config.viewer).await else {
        anyhow::bail!("preview page is missing the news containers");
    };

    if let Some(slug) = select {
        viewer.activate(slug, Input::Pointer);
    }

    println!("== list ==");
    println!("{}", viewer.list_html());
    println!(
        "== detail ({}) ==",
        if viewer.detail_visible() {
            "visible"
        } else {
            "hidden"
        }
    );
    println!("{}", viewer.detail_html());

    Ok(())
}
