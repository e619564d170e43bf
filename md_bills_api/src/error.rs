//! Errors that can happen while scraping a single bill.
//!
//! None of these are fatal to a batch run - the orchestrator logs them and moves on to the next step or bill.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug,Error)]
pub enum ScrapeError {
    /// A section of the page (container, table) is not there. Not really an error, many bills have no witness list.
    #[error("could not find {0}")]
    MissingSection(&'static str),
    #[error("failed to fetch {url}: {source}")]
    Fetch { url : String, #[source] source : reqwest::Error },
    #[error("{url} returned HTTP status {status}")]
    HttpStatus { url : String, status : reqwest::StatusCode },
    /// The site answers a missing document with an HTML page rather than a 404.
    #[error("{url} did not return a PDF")]
    NotPdf { url : String },
    #[error("failed to write {path}: {source}")]
    Write { path : PathBuf, #[source] source : std::io::Error },
    #[error("failed to write csv {path}: {source}")]
    Csv { path : PathBuf, #[source] source : csv::Error },
}

impl ScrapeError {
    /// Whether this is just a missing part of the page rather than something going wrong.
    pub fn is_missing_section(&self) -> bool {
        matches!(self,ScrapeError::MissingSection(_))
    }
}
