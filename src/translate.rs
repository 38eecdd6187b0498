use crate::error::FinderError;
use tracing::{info, warn};

const GTX_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Machine-translation seam. One call per search; the service is opaque and
/// gets no retry.
#[async_trait::async_trait]
pub trait Translate: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, FinderError>;
}

/// Client for the public Google Translate `gtx` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Result<GoogleTranslator, FinderError> {
        Ok(GoogleTranslator {
            client: reqwest::Client::builder().build()?,
            endpoint: GTX_ENDPOINT.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Translate for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, FinderError> {
        let payload = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        translated_text(&payload)
    }
}

/// Pull the translated string out of a gtx response. The payload is a nested
/// array; element 0 holds the translation segments, each segment's element 0
/// being one chunk of translated text.
fn translated_text(payload: &str) -> Result<String, FinderError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let segments = value
        .get(0)
        .and_then(serde_json::Value::as_array)
        .ok_or(FinderError::EmptyTranslation)?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(serde_json::Value::as_str))
        .collect();

    if text.is_empty() {
        Err(FinderError::EmptyTranslation)
    } else {
        Ok(text)
    }
}

/// Best-effort translation: any failure keeps the original keyword so a
/// translation outage never blocks the search. Returns the effective keyword
/// and, on failure, a notice for the report.
pub async fn translate_or_keep<T>(translator: &T, keyword: &str) -> (String, Option<String>)
where
    T: Translate + ?Sized,
{
    match translator.translate(keyword, "en", "gu").await {
        Ok(translated) => {
            info!("Translated '{}' to '{}'", keyword, translated);
            (translated, None)
        }
        Err(e) => {
            warn!("Translation failed: {}", e);
            (
                keyword.to_string(),
                Some(format!("Translation failed: {}", e)),
            )
        }
    }
}
