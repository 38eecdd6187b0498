use crate::error::FinderError;
use crate::fetch::Fetch;
use crate::sites::SiteProfile;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::info;

lazy_static! {
    static ref A: Selector = Selector::parse("a[href]").expect("Invalid selector");
}

/// Anchors whose rendered text contains `keyword` as a literal substring, in
/// document order, with hrefs normalized through the profile. Matching is
/// case-sensitive, nothing is trimmed or collapsed, and duplicate anchors
/// yield duplicate links.
pub fn links_in_page(profile: &dyn SiteProfile, keyword: &str, doc: &Html) -> Vec<String> {
    doc.select(&A)
        .filter(|a| a.text().collect::<String>().contains(keyword))
        .filter_map(|a| a.value().attr("href"))
        .map(|href| profile.normalize_link(href))
        .collect()
}

/// Fetch the profile's homepage and collect matching article links. A fetch
/// failure is returned to the caller; it is distinct from a successful fetch
/// that simply matched nothing.
pub async fn collect_links<F>(
    fetcher: &F,
    profile: &dyn SiteProfile,
    keyword: &str,
) -> Result<Vec<String>, FinderError>
where
    F: Fetch + ?Sized,
{
    let html = fetcher.get_text(profile.base_url()).await?;
    let doc = Html::parse_document(&html);
    let links = links_in_page(profile, keyword, &doc);
    info!("Found {} matching links on {}", links.len(), profile.name());
    Ok(links)
}
