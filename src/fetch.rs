//! Document acquisition from files, URLs and standard input.

use std::{
    fmt, fs,
    io::{self, Read},
    path::PathBuf,
    time::Duration,
};

use tracing::info;

use crate::document::Document;

const USER_AGENT: &str = concat!("gq/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Where the HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    Stdin,
}

impl Source {
    /// `http:` and `https:` locations are URLs, anything else is a path.
    pub fn from_location(location: &str) -> Self {
        if is_url(location) {
            Source::Url(location.to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http:") || location.starts_with("https:")
}

/// Errors that can occur while acquiring a document
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} when fetching {url}")]
    Status { url: String, status: u16 },
}

/// Read the raw HTML of a source.
pub fn read_source(source: &Source) -> Result<String, FetchError> {
    info!(%source, "loading document");
    match source {
        Source::File(path) => fs::read_to_string(path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        }),
        Source::Url(url) => fetch_url(url),
        Source::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(FetchError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// GET a URL and return the body. No retries.
pub fn fetch_url(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}

/// Load and parse a document from a file path or URL.
///
/// ```no_run
/// let doc = gq::load("https://example.com")?;
/// println!("{}", doc.root().find("title").text());
/// # Ok::<(), gq::FetchError>(())
/// ```
pub fn load(location: &str) -> Result<Document, FetchError> {
    load_source(&Source::from_location(location))
}

pub fn load_source(source: &Source) -> Result<Document, FetchError> {
    let html = read_source(source)?;
    Ok(Document::parse(&html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_with_http_scheme_are_urls() {
        assert_eq!(
            Source::from_location("https://example.com/a"),
            Source::Url("https://example.com/a".to_string())
        );
        assert_eq!(
            Source::from_location("http:x"),
            Source::Url("http:x".to_string())
        );
        assert_eq!(
            Source::from_location("pages/http.html"),
            Source::File(PathBuf::from("pages/http.html"))
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_source(&Source::File(PathBuf::from("/definitely/not/here.html"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.html"));
    }
}
