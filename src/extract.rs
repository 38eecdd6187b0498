use crate::fetch::Fetch;
use crate::sites::SiteProfile;
use itertools::Itertools;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

pub const DATE_NOT_FOUND: &str = "Date not found";
pub const NO_CONTENT: &str = "No article content found.";

lazy_static! {
    static ref P: Selector = Selector::parse("p").expect("Invalid selector");
}

/// One extracted article. `date` and `body` may carry sentinel text when the
/// page lacks the expected structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub url: String,
    pub date: String,
    pub body: String,
}

impl fmt::Display for ArticleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Link         : {}", self.url)?;
        writeln!(f, "Published on : {}", self.date)?;
        writeln!(f, "Content      :")?;
        for line in self.body.lines() {
            writeln!(f, "> {}", line)?;
        }
        Ok(())
    }
}

/// Date and body per the profile's strategy.
///
/// The body fallback order must hold: paragraphs of the profile's container,
/// else every paragraph on the page with non-empty text, else the sentinel.
/// Inside a found container paragraph texts are kept as-is, empty or not.
pub fn article_in_page(profile: &dyn SiteProfile, doc: &Html) -> (String, String) {
    let date = profile
        .date(doc)
        .unwrap_or_else(|| DATE_NOT_FOUND.to_string());

    let body = match profile.body_container(doc) {
        Some(container) => container
            .select(&P)
            .map(|p| p.text().collect::<String>())
            .join("\n"),
        None => {
            debug!(
                "No {} body container, falling back to page paragraphs",
                profile.name()
            );
            doc.select(&P)
                .map(|p| p.text().collect::<String>())
                .filter(|text| !text.is_empty())
                .join("\n")
        }
    };

    if body.is_empty() {
        (date, NO_CONTENT.to_string())
    } else {
        (date, body)
    }
}

/// Fetch one article page and extract it. A fetch failure is soft: the error
/// text lands in the date field and the body stays empty, so the remaining
/// links still get processed.
pub async fn extract_article<F>(fetcher: &F, url: &str, profile: &dyn SiteProfile) -> ArticleRecord
where
    F: Fetch + ?Sized,
{
    match fetcher.get_text(url).await {
        Ok(html) => {
            let doc = Html::parse_document(&html);
            let (date, body) = article_in_page(profile, &doc);
            ArticleRecord {
                url: url.to_string(),
                date,
                body,
            }
        }
        Err(e) => {
            warn!("Failed to extract {}: {}", url, e);
            ArticleRecord {
                url: url.to_string(),
                date: format!("Error extracting article for {}: {}", profile.name(), e),
                body: String::new(),
            }
        }
    }
}
