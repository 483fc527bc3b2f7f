//! Loading the budget dataset, from the published URL or a local copy.

use crate::core::BudgetLineItem;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Where the published summary lives
pub const DEFAULT_DATA_URL: &str = "http://budget.council.nyc/assets/data/summary.json";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("failed to read budget data: {0}")]
    Io(#[from] io::Error),
    #[error("malformed budget data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no input received on stdin")]
    EmptyStdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
    Stdin,
}

impl DataSource {
    /// A local path, with `-` meaning stdin.
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            DataSource::Stdin
        } else {
            DataSource::File(path)
        }
    }

    pub fn load(&self) -> Result<Vec<BudgetLineItem>, SourceError> {
        match self {
            DataSource::Url(url) => fetch_line_items(url),
            DataSource::File(path) => {
                let file = File::open(path)?;
                read_line_items(BufReader::new(file))
            }
            DataSource::Stdin => read_from_stdin(),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Stdin => write!(f, "stdin"),
        }
    }
}

/// Decode a JSON array of `{agency, amount}` records. Other fields are ignored.
pub fn read_line_items<R: Read>(reader: R) -> Result<Vec<BudgetLineItem>, SourceError> {
    let items: Vec<BudgetLineItem> = serde_json::from_reader(reader)?;
    Ok(items)
}

/// Download the dataset with a single unauthenticated GET
pub fn fetch_line_items(url: &str) -> Result<Vec<BudgetLineItem>, SourceError> {
    let response = ureq::get(url).call().map_err(|e| SourceError::Http {
        url: url.to_string(),
        source: Box::new(e),
    })?;
    let items = read_line_items(response.into_reader())?;
    log::info!("{} budget line items fetched from {}", items.len(), url);
    Ok(items)
}

fn read_from_stdin() -> Result<Vec<BudgetLineItem>, SourceError> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        return Err(SourceError::EmptyStdin);
    }
    read_line_items(io::Cursor::new(buffer))
}
