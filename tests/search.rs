use gujarati_news_finder::sites::{self, SiteProfile};
use gujarati_news_finder::{run_search, ArticleRecord, Fetch, FinderError, SiteOutcome, Translate};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Mutex;

struct StubFetcher {
    pages: HashMap<String, String>,
    failures: HashMap<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn new() -> StubFetcher {
        StubFetcher {
            pages: HashMap::new(),
            failures: HashMap::new(),
            requests: Mutex::new(vec![]),
        }
    }

    fn with_page(mut self, url: &str, html: &str) -> StubFetcher {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    fn with_failure(mut self, url: &str, status: u16) -> StubFetcher {
        self.failures.insert(url.to_string(), status);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetch for StubFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FinderError> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(&status) = self.failures.get(url) {
            return Err(FinderError::Status {
                status,
                url: url.to_string(),
            });
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FinderError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// `None` simulates a translation outage.
struct StubTranslator {
    translation: Option<String>,
    calls: Mutex<u32>,
}

impl StubTranslator {
    fn returning(translation: &str) -> StubTranslator {
        StubTranslator {
            translation: Some(translation.to_string()),
            calls: Mutex::new(0),
        }
    }

    fn failing() -> StubTranslator {
        StubTranslator {
            translation: None,
            calls: Mutex::new(0),
        }
    }

    fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Translate for StubTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, FinderError> {
        *self.calls.lock().unwrap() += 1;
        match &self.translation {
            Some(t) => Ok(t.clone()),
            None => Err(FinderError::EmptyTranslation),
        }
    }
}

fn gujarat_samachar_only() -> Vec<Box<dyn SiteProfile>> {
    vec![sites::find("gujarat-samachar").expect("Unknown site")]
}

#[tokio::test]
async fn test_keyword_is_translated_and_matching_article_extracted() {
    let fetcher = StubFetcher::new()
        .with_page(
            "https://www.gujarat-samachar.com/",
            r#"<html><body>
                <a href="/news/1">2024 ચૂંટણી પરિણામ</a>
                <a href="/news/cricket">ક્રિકેટ સમાચાર</a>
            </body></html>"#,
        )
        .with_page(
            "https://www.gujarat-samachar.com/news/1",
            r#"<html><body>
                <h5>10 જાન્યુઆરી, 2024</h5>
                <div class="article-body"><p>A.</p><p>B.</p></div>
            </body></html>"#,
        );
    let translator = StubTranslator::returning("ચૂંટણી");

    let report = run_search(&fetcher, &translator, &gujarat_samachar_only(), "election")
        .await
        .unwrap();

    assert_eq!(report.keyword, "election");
    assert_eq!(report.effective_keyword, "ચૂંટણી");
    assert_eq!(report.translation_notice, None);
    assert_eq!(report.sites.len(), 1);
    assert_eq!(report.sites[0].site, "Gujarat Samachar");
    assert_eq!(
        report.sites[0].outcome,
        SiteOutcome::Articles(vec![ArticleRecord {
            url: "https://www.gujarat-samachar.com/news/1".to_string(),
            date: "10 જાન્યુઆરી, 2024".to_string(),
            body: "A.\nB.".to_string(),
        }])
    );
}

#[tokio::test]
async fn test_empty_keyword_is_rejected_before_any_network_activity() {
    let fetcher = StubFetcher::new();
    let translator = StubTranslator::returning("ચૂંટણી");

    let result = run_search(&fetcher, &translator, &sites::default_profiles(), "").await;

    assert!(matches!(result, Err(FinderError::EmptyKeyword)));
    assert_eq!(fetcher.requests(), Vec::<String>::new());
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn test_failed_homepage_fetch_does_not_halt_the_other_sites() {
    let fetcher = StubFetcher::new()
        .with_failure("https://www.gujarat-samachar.com/", 500)
        .with_page(
            "https://www.divyabhaskar.co.in/",
            r#"<html><body>
                <a href="https://www.divyabhaskar.co.in/news/a">ચૂંટણી સમાચાર</a>
            </body></html>"#,
        )
        .with_page(
            "https://www.divyabhaskar.co.in/news/a",
            r#"<html><body>
                <time>2 કલાક પહેલા</time>
                <div class="article__body"><p>મતદાન પૂર્ણ.</p></div>
            </body></html>"#,
        )
        .with_page(
            "https://sandesh.com/",
            r#"<html><body><a href="/news/b">હવામાન</a></body></html>"#,
        );
    let translator = StubTranslator::returning("ચૂંટણી");

    let report = run_search(&fetcher, &translator, &sites::default_profiles(), "election")
        .await
        .unwrap();

    assert_eq!(report.sites.len(), 3);
    match &report.sites[0].outcome {
        SiteOutcome::FetchFailed(e) => assert!(e.contains("500"), "unexpected error: {}", e),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
    assert_eq!(
        report.sites[1].outcome,
        SiteOutcome::Articles(vec![ArticleRecord {
            url: "https://www.divyabhaskar.co.in/news/a".to_string(),
            date: "2 કલાક પહેલા".to_string(),
            body: "મતદાન પૂર્ણ.".to_string(),
        }])
    );
    assert_eq!(report.sites[2].outcome, SiteOutcome::NoMatches);
}

#[tokio::test]
async fn test_failed_article_fetch_yields_a_soft_record_and_processing_continues() {
    let fetcher = StubFetcher::new()
        .with_page(
            "https://www.gujarat-samachar.com/",
            r#"<html><body>
                <a href="/news/missing">ચૂંટણી ઝુંબેશ</a>
                <a href="/news/2">ચૂંટણી તારીખો</a>
            </body></html>"#,
        )
        .with_page(
            "https://www.gujarat-samachar.com/news/2",
            r#"<html><body>
                <h5>12 જાન્યુઆરી, 2024</h5>
                <div class="article-body"><p>જાહેરનામું બહાર પડ્યું.</p></div>
            </body></html>"#,
        );
    let translator = StubTranslator::returning("ચૂંટણી");

    let report = run_search(&fetcher, &translator, &gujarat_samachar_only(), "election")
        .await
        .unwrap();

    let records = match &report.sites[0].outcome {
        SiteOutcome::Articles(records) => records,
        other => panic!("expected Articles, got {:?}", other),
    };
    assert_eq!(records.len(), 2);
    assert!(records[0]
        .date
        .starts_with("Error extracting article for Gujarat Samachar:"));
    assert_eq!(records[0].body, "");
    assert_eq!(records[1].date, "12 જાન્યુઆરી, 2024");
    assert_eq!(records[1].body, "જાહેરનામું બહાર પડ્યું.");
}

#[tokio::test]
async fn test_translation_failure_falls_back_to_the_original_keyword() {
    let fetcher = StubFetcher::new()
        .with_page(
            "https://www.gujarat-samachar.com/",
            r#"<html><body><a href="/news/e">Election update 2024</a></body></html>"#,
        )
        .with_page(
            "https://www.gujarat-samachar.com/news/e",
            r#"<html><body>
                <h5>Jan 10, 2024</h5>
                <div class="article-body"><p>Counting underway.</p></div>
            </body></html>"#,
        );
    let translator = StubTranslator::failing();

    let report = run_search(&fetcher, &translator, &gujarat_samachar_only(), "Election")
        .await
        .unwrap();

    assert_eq!(report.effective_keyword, "Election");
    let notice = report.translation_notice.expect("notice missing");
    assert!(notice.starts_with("Translation failed:"), "{}", notice);
    assert_eq!(
        report.sites[0].outcome,
        SiteOutcome::Articles(vec![ArticleRecord {
            url: "https://www.gujarat-samachar.com/news/e".to_string(),
            date: "Jan 10, 2024".to_string(),
            body: "Counting underway.".to_string(),
        }])
    );
}

#[tokio::test]
async fn test_duplicate_anchors_produce_duplicate_records_in_document_order() {
    let fetcher = StubFetcher::new()
        .with_page(
            "https://www.gujarat-samachar.com/",
            r#"<html><body>
                <a href="/news/1">ચૂંટણી આજે</a>
                <a href="/news/1">ચૂંટણી આજે</a>
            </body></html>"#,
        )
        .with_page(
            "https://www.gujarat-samachar.com/news/1",
            r#"<html><body>
                <h5>આજે</h5>
                <div class="article-body"><p>મતદાન.</p></div>
            </body></html>"#,
        );
    let translator = StubTranslator::returning("ચૂંટણી");

    let report = run_search(&fetcher, &translator, &gujarat_samachar_only(), "election")
        .await
        .unwrap();

    let records = match &report.sites[0].outcome {
        SiteOutcome::Articles(records) => records,
        other => panic!("expected Articles, got {:?}", other),
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}
