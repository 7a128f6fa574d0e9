//! Retrieval of documents by URL.
//!
//! The crawler only needs "URL in, bytes out"; anything implementing
//! [`Fetcher`] can supply them. [`HttpFetcher`] is the blocking HTTP
//! implementation used by [`HtmlCrawler::from_url`](crate::HtmlCrawler::from_url).
//!
//! Fetching blocks the calling thread. There is no retry, and no timeout
//! unless one is configured on the fetcher.

use url::Url;

use crate::error::Result;

/// Source of raw document bytes.
pub trait Fetcher {
    /// Retrieve the body at `url`.
    ///
    /// Failures are reported as [`Error::FetchError`](crate::Error::FetchError).
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

impl<F> Fetcher for F
where
    F: Fn(&Url) -> Result<Vec<u8>>,
{
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        self(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use url::Url;

    use super::Fetcher;
    use crate::error::{Error, Result};

    /// Blocking HTTP(S) fetcher.
    ///
    /// Redirects are followed; any final status outside 2xx is an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use html_crawler::{HtmlCrawler, HttpFetcher, Options};
    ///
    /// let fetcher = HttpFetcher::new().with_timeout(Duration::from_secs(10));
    /// let text = HtmlCrawler::from_url_with("https://example.com", &fetcher, Options::default())?
    ///     .clean()?;
    /// # Ok::<(), html_crawler::Error>(())
    /// ```
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct HttpFetcher {
        timeout: Option<Duration>,
        user_agent: Option<String>,
    }

    impl HttpFetcher {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Give up on requests that take longer than `timeout`.
        #[must_use]
        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = Some(timeout);
            self
        }

        /// Send `user_agent` instead of the client default.
        #[must_use]
        pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
            self.user_agent = Some(user_agent.into());
            self
        }

        fn client(&self) -> Result<reqwest::blocking::Client> {
            let mut builder = reqwest::blocking::Client::builder().timeout(self.timeout);
            if let Some(user_agent) = &self.user_agent {
                builder = builder.user_agent(user_agent.as_str());
            }
            builder
                .build()
                .map_err(|e| Error::FetchError(format!("could not build HTTP client: {e}")))
        }
    }

    impl Fetcher for HttpFetcher {
        fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
            let response = self
                .client()?
                .get(url.as_str())
                .send()
                .map_err(|e| Error::FetchError(format!("{url}: {e}")))?;

            let status = response.status();
            log::debug!("GET {url} -> {status}");
            if !status.is_success() {
                return Err(Error::FetchError(format!("{url}: HTTP status {status}")));
            }

            let body = response
                .bytes()
                .map_err(|e| Error::FetchError(format!("{url}: {e}")))?;
            Ok(body.to_vec())
        }
    }
}
