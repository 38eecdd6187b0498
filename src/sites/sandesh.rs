use super::{first_text, SiteProfile};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref DATE: Selector = Selector::parse("span.date").expect(E);
    static ref BODY: Selector = Selector::parse("div.content").expect(E);
}

#[derive(Debug)]
pub struct Sandesh;

impl SiteProfile for Sandesh {
    fn name(&self) -> &'static str {
        "Sandesh"
    }

    fn key(&self) -> &'static str {
        "sandesh"
    }

    fn base_url(&self) -> &'static str {
        "https://sandesh.com/"
    }

    fn date(&self, doc: &Html) -> Option<String> {
        first_text(doc, &DATE)
    }

    fn body_container<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&BODY).next()
    }
}
