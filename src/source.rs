use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;

/// Fixed location of the backing file, relative to the working directory.
/// The file is deployed alongside the server and is never written to.
pub const QUOTES_FILE_PATH: &str = "quotes.json";

/// The two document shapes the backing file is allowed to take. Shape
/// validation happens here, at the read boundary, so handlers only ever
/// see a well-formed variant.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SourceDocument {
    Flat(Vec<FlatQuote>),
    Nested(PrayerBook),
}

/// One record of the flat-array document shape. Fields are optional so a
/// malformed row degrades to exclusion rather than failing the document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlatQuote {
    pub id: Option<i64>,
    pub text: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PrayerBook {
    pub prayers: Vec<Prayer>,
    pub categories: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Prayer {
    pub id: Option<i64>,
    pub translation_al: Option<String>,
    pub arabic_text: Option<String>,
    pub source_type: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    pub title: Option<String>,
    pub transliteration: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub preamble_arabic: Option<String>,
    pub preamble_transliteration: Option<String>,
}

#[async_trait]
pub trait DocumentProvider: Send + Sync {
    async fn load_document(&self) -> Result<SourceDocument, AppError>;
}

/// Reads and validates the backing file on every call. No caching: the
/// response always reflects the file as it is on disk right now.
#[derive(Debug)]
pub struct FileDocumentProvider {
    path: PathBuf,
}

impl FileDocumentProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentProvider for FileDocumentProvider {
    async fn load_document(&self) -> Result<SourceDocument, AppError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            AppError::storage(format!(
                "failed to read {}: {err}",
                self.path.display()
            ))
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            AppError::format(format!(
                "{} is not valid JSON: {err}",
                self.path.display()
            ))
        })?;

        parse_document(value).map_err(|err| {
            AppError::shape(format!("{}: {err}", self.path.display()))
        })
    }
}

fn parse_document(value: Value) -> Result<SourceDocument, String> {
    serde_json::from_value(value)
        .map_err(|_| "document is neither a quote array nor a prayer collection".to_string())
}
