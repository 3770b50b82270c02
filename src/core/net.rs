// src/core/net.rs
//
// Fetch collaborator: blocking HTTP GET against the feed API and the site
// pages, with the request headers the feed endpoint requires. Transport
// failures never propagate past the runner; a failed or empty fetch just
// means "no data for this key this run".

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use thiserror::Error;
use tracing::warn;

use crate::params;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("http status {0} for {1}")]
    Status(u16, String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct Client {
    http: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self, NetError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(params::USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(params::REFERER));
        headers.insert("x-fsign", HeaderValue::from_static(params::FEED_SIGN));

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(params::HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    fn get(&self, url: &str) -> Result<String, NetError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status(status.as_u16(), s!(url)));
        }
        Ok(resp.text()?)
    }

    /// Fetch one feed payload. Empty string on failure; retried once after a
    /// longer pause so a transient hiccup doesn't retire the key upstream.
    pub fn fetch_feed(&self, feed_id: &str) -> String {
        let url = format!("{}{}", params::FEED_BASE, feed_id);
        match self.get(&url) {
            Ok(body) => body,
            Err(e) => {
                warn!("FAIL {feed_id}: {e}, retrying");
                thread::sleep(Duration::from_millis(params::RETRY_DELAY_MS));
                match self.get(&url) {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("FAIL {feed_id}: {e}");
                        s!()
                    }
                }
            }
        }
    }

    /// Fetch a site HTML page (team results). Empty string on failure.
    pub fn fetch_page(&self, path: &str) -> String {
        let url = format!("{}{}", params::SITE_BASE, path);
        match self.get(&url) {
            Ok(body) => body,
            Err(e) => {
                warn!("FAIL {path}: {e}");
                s!()
            }
        }
    }
}
