use super::{first_text, SiteProfile};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref DATE: Selector = Selector::parse("time").expect(E);
    static ref BODY: Selector = Selector::parse("div.article__body").expect(E);
}

#[derive(Debug)]
pub struct DivyaBhaskar;

impl SiteProfile for DivyaBhaskar {
    fn name(&self) -> &'static str {
        "Divya Bhaskar"
    }

    fn key(&self) -> &'static str {
        "divya-bhaskar"
    }

    fn base_url(&self) -> &'static str {
        "https://www.divyabhaskar.co.in/"
    }

    fn date(&self, doc: &Html) -> Option<String> {
        first_text(doc, &DATE)
    }

    fn body_container<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&BODY).next()
    }
}
