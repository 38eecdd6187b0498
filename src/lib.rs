use serde::Serialize;
use std::fmt;
use tracing::warn;

pub mod sites;

mod collect;
mod error;
mod extract;
mod fetch;
mod translate;

pub use collect::{collect_links, links_in_page};
pub use error::FinderError;
pub use extract::{article_in_page, extract_article, ArticleRecord, DATE_NOT_FOUND, NO_CONTENT};
pub use fetch::{Fetch, HttpFetcher};
pub use translate::{translate_or_keep, GoogleTranslator, Translate};

use sites::SiteProfile;

/// What happened on one site. A homepage that could not be fetched is not
/// the same thing as a homepage with no matching anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SiteOutcome {
    FetchFailed(String),
    NoMatches,
    /// One record per matching link, in the order the links appeared.
    Articles(Vec<ArticleRecord>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    pub site: String,
    pub outcome: SiteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// The keyword as the user typed it.
    pub keyword: String,
    /// The keyword the sites were actually searched with (translated, or the
    /// original when translation failed).
    pub effective_keyword: String,
    pub translation_notice: Option<String>,
    pub searched_at: String,
    pub sites: Vec<SiteReport>,
}

/// Drive one full search: translate the keyword once, then for each profile
/// collect matching homepage links and extract every linked article, strictly
/// in sequence. Links found through a profile are always extracted through
/// that same profile, and a failure on one site never aborts the ones after
/// it.
pub async fn run_search<F, T>(
    fetcher: &F,
    translator: &T,
    profiles: &[Box<dyn SiteProfile>],
    keyword: &str,
) -> Result<SearchReport, FinderError>
where
    F: Fetch + ?Sized,
    T: Translate + ?Sized,
{
    if keyword.is_empty() {
        return Err(FinderError::EmptyKeyword);
    }

    let (effective_keyword, translation_notice) = translate_or_keep(translator, keyword).await;

    let mut site_reports = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let outcome = match collect_links(fetcher, profile.as_ref(), &effective_keyword).await {
            Err(e) => {
                warn!(
                    "An error occurred while fetching links for {}: {}",
                    profile.name(),
                    e
                );
                SiteOutcome::FetchFailed(e.to_string())
            }
            Ok(links) if links.is_empty() => SiteOutcome::NoMatches,
            Ok(links) => {
                let mut records = Vec::with_capacity(links.len());
                for link in &links {
                    records.push(extract_article(fetcher, link, profile.as_ref()).await);
                }
                SiteOutcome::Articles(records)
            }
        };
        site_reports.push(SiteReport {
            site: profile.name().to_string(),
            outcome,
        });
    }

    Ok(SearchReport {
        keyword: keyword.to_string(),
        effective_keyword,
        translation_notice,
        searched_at: now_rfc3339(),
        sites: site_reports,
    })
}

fn now_rfc3339() -> String {
    chrono::offset::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keyword     : {}", self.keyword)?;
        writeln!(f, "Searched as : {}", self.effective_keyword)?;
        writeln!(f, "Searched at : {}", self.searched_at)?;
        if let Some(notice) = &self.translation_notice {
            writeln!(f, "Notice      : {}", notice)?;
        }

        for report in &self.sites {
            writeln!(f)?;
            writeln!(f, "Articles from {}", report.site)?;
            match &report.outcome {
                SiteOutcome::FetchFailed(e) => {
                    writeln!(
                        f,
                        "An error occurred while fetching links for {}: {}",
                        report.site, e
                    )?;
                }
                SiteOutcome::NoMatches => {
                    writeln!(
                        f,
                        "No articles found with the keyword '{}' on {}.",
                        self.keyword, report.site
                    )?;
                }
                SiteOutcome::Articles(records) => {
                    writeln!(
                        f,
                        "Found {} articles with the keyword '{}' on {}:",
                        records.len(),
                        self.keyword,
                        report.site
                    )?;
                    for (i, record) in records.iter().enumerate() {
                        writeln!(f, "Article {}:", i + 1)?;
                        write!(f, "{}", record)?;
                    }
                }
            }
        }

        Ok(())
    }
}
