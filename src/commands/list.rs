//! List compiled news records

use anyhow::Result;

use crate::content::loader;
use crate::helpers::display_date;
use crate::Newsbox;

/// Print every record the compiler would emit
pub fn run(app: &Newsbox) -> Result<()> {
    let posts = loader::load_posts(&app.source_dir)?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post.date_key().map(display_date).unwrap_or_default();
        println!("  {:10} - {} [{}]", date, post.display_title(), post.slug);
    }

    Ok(())
}
