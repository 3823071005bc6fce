use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
