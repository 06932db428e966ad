// src/specs/index.rs
// Creature discovery on the wiki's monster index page.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::CREATURE_LINK_PATTERN;

static LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));
static CREATURE_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CREATURE_LINK_PATTERN).expect("static pattern"));

/// Absolute URLs of every creature page linked from `index_html`, in page order.
/// The index links some creatures more than once; only the first link is kept.
pub fn creature_links(index_html: &str, site_base: &str) -> Vec<String> {
    let doc = Html::parse_document(index_html);
    let base = site_base.trim_end_matches('/');

    let mut seen = HashSet::new();
    doc.select(&LINKS)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| CREATURE_HREF.is_match(href))
        .map(|href| {
            if href.starts_with("http") { s!(href) } else { join!(base, href) }
        })
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_creature_links_in_order() {
        let html = r#"<ul>
<li><a href="/wiki/Giant_Eel_(5e_Creature)">Giant Eel</a></li>
<li><a href="/wiki/5e_Monsters">Monsters</a></li>
<li><a href="/wiki/Ash_Wyrm_(5e_Creature)">Ash Wyrm</a></li>
<li><a href="/wiki/Giant_Eel_(5e_Creature)">Giant Eel again</a></li>
<li><a href="/wiki/Blade_(5e_Equipment)">Blade</a></li>
</ul>"#;
        let links = creature_links(html, "https://dandwiki.com/");
        assert_eq!(links, vec![
            "https://dandwiki.com/wiki/Giant_Eel_(5e_Creature)",
            "https://dandwiki.com/wiki/Ash_Wyrm_(5e_Creature)",
        ]);
    }

    #[test]
    fn no_links_is_empty() {
        assert!(creature_links("<p>nothing here</p>", "https://dandwiki.com").is_empty());
    }
}
