use super::{first_text, SiteProfile};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref DATE: Selector = Selector::parse("h5").expect(E);
    static ref BODY: Selector = Selector::parse("div.article-body").expect(E);
}

#[derive(Debug)]
pub struct GujaratSamachar;

impl SiteProfile for GujaratSamachar {
    fn name(&self) -> &'static str {
        "Gujarat Samachar"
    }

    fn key(&self) -> &'static str {
        "gujarat-samachar"
    }

    fn base_url(&self) -> &'static str {
        "https://www.gujarat-samachar.com/"
    }

    // Homepage anchors are site-relative.
    fn normalize_link(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url().trim_end_matches('/'),
                href.trim_start_matches('/')
            )
        }
    }

    fn date(&self, doc: &Html) -> Option<String> {
        first_text(doc, &DATE)
    }

    fn body_container<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&BODY).next()
    }
}
