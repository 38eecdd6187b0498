mod divya_bhaskar;
mod gujarat_samachar;
mod sandesh;

pub use divya_bhaskar::DivyaBhaskar;
pub use gujarat_samachar::GujaratSamachar;
pub use sandesh::Sandesh;

use scraper::{ElementRef, Html, Selector};

/// Per-site extraction strategy: where the homepage lives, how anchor hrefs
/// become fetchable URLs, and which elements carry an article's date and
/// body. Links collected through a profile must be extracted through the
/// same profile.
pub trait SiteProfile: Send + Sync {
    fn name(&self) -> &'static str;

    /// Short identifier used to pick a single site from the CLI.
    fn key(&self) -> &'static str;

    fn base_url(&self) -> &'static str;

    /// Hrefs are absolute on most sites; profiles whose homepages emit
    /// site-relative links override this.
    fn normalize_link(&self, href: &str) -> String {
        href.to_string()
    }

    /// Text of the first date element, if present.
    fn date(&self, doc: &Html) -> Option<String>;

    /// The container holding the article's paragraphs, if present.
    fn body_container<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>>;
}

/// All configured newspapers, in report order.
pub fn default_profiles() -> Vec<Box<dyn SiteProfile>> {
    vec![
        Box::new(GujaratSamachar),
        Box::new(DivyaBhaskar),
        Box::new(Sandesh),
    ]
}

pub fn find(key: &str) -> Option<Box<dyn SiteProfile>> {
    default_profiles().into_iter().find(|p| p.key() == key)
}

pub(crate) fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
