//! Getting things off the web and onto disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;
use crate::config::Config;
use crate::error::ScrapeError;

/// Something that can get the body of a URL.
pub trait Fetcher {
    fn fetch(&self,url:&str) -> Result<Vec<u8>,ScrapeError>;
}

/// Fetch over HTTP(S), one request at a time.
pub struct HttpFetcher {
    client : reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config:&Config) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(HttpFetcher{ client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self,url:&str) -> Result<Vec<u8>,ScrapeError> {
        debug!("Downloading {}",url);
        let fetch_error = |source:reqwest::Error|ScrapeError::Fetch{ url: url.to_string(), source };
        let response = self.client.get(url).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() { return Err(ScrapeError::HttpStatus{ url: url.to_string(), status }); }
        let content = response.bytes().map_err(fetch_error)?;
        Ok(content.to_vec())
    }
}

/// PDFs start with `%PDF-`. The site serves an HTML error page for documents that do not exist.
pub fn looks_like_pdf(content:&[u8]) -> bool {
    content.starts_with(b"%PDF-")
}

/// Save `content` as `dir/filename`, replacing any existing file.
/// The content goes to a temporary file in the same directory first, so a failure never leaves a partial file behind.
pub fn save_download(dir:&Path,filename:&str,content:&[u8]) -> Result<PathBuf,ScrapeError> {
    let path = dir.join(filename);
    let write_error = |source:std::io::Error|ScrapeError::Write{ path: path.clone(), source };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(content).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(&path).map_err(|e|write_error(e.error))?;
    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_pdf() {
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"<!DOCTYPE html><html>"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn test_save_download_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_download(dir.path(),"bill_0001.pdf",b"%PDF-old").unwrap();
        assert_eq!(dir.path().join("bill_0001.pdf"),path);
        save_download(dir.path(),"bill_0001.pdf",b"%PDF-new").unwrap();
        assert_eq!(b"%PDF-new".to_vec(),std::fs::read(&path).unwrap());
        assert_eq!(1,std::fs::read_dir(dir.path()).unwrap().count());
    }

    #[test]
    fn test_save_download_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(save_download(&missing,"x.pdf",b"%PDF-"),Err(ScrapeError::Write{..})));
    }
}
