#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid translation payload: {0}")]
    TranslationPayload(#[from] serde_json::Error),

    #[error("Translation service returned no text")]
    EmptyTranslation,

    #[error("Please enter a keyword")]
    EmptyKeyword,
}
