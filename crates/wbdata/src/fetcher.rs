//! Cached, paginated fetcher for the indicator API.

use std::sync::Arc;

use tracing::{debug, warn};
use url::form_urlencoded;
use wbdata_core::{CacheEntry, FetchCache, PagedResponse, Record, Result, daycount};

use crate::transport::{HttpTransport, Transport};

/// Maximum number of attempts per URL on transport failure.
pub const TRIES: usize = 5;

/// Fixed page size requested from the API.
pub const PER_PAGE: u32 = 1000;

/// Cached, paginated fetcher for one logical query against the API.
///
/// The fetcher appends `format=json&per_page=1000` to every query, follows
/// the result set page by page until the API reports the last page, and
/// returns the concatenated records. Every page fetched live is written into
/// the cache keyed by that page's exact URL, whether or not cache reads were
/// requested, so a `use_cache = false` call still refreshes the cache for
/// future ones.
///
/// All I/O is synchronous and blocking; requests are issued one at a time.
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    cache: Arc<dyn FetchCache>,
    tries: usize,
    per_page: u32,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("tries", &self.tries)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl Fetcher {
    /// Create a fetcher using the real HTTP transport.
    #[must_use]
    pub fn new(cache: Arc<dyn FetchCache>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), cache)
    }

    /// Create a fetcher with a custom transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, cache: Arc<dyn FetchCache>) -> Self {
        Self {
            transport,
            cache,
            tries: TRIES,
            per_page: PER_PAGE,
        }
    }

    /// Fetch the full record set for one logical query.
    ///
    /// `base_url` is the request path without a query string; `params` is an
    /// ordered list of GET parameters (duplicates allowed, order preserved)
    /// to which `format=json` and `per_page=1000` are appended; `use_cache`
    /// controls whether fresh cached pages may satisfy reads.
    ///
    /// Returns `Ok(Some(records))` with every page's records concatenated in
    /// page order, or `Ok(None)` when no data could be produced: transport
    /// failure after all retries, a malformed response body, or an API
    /// report of zero total records. The three cases are logged but
    /// deliberately not distinguished in the return value; callers treat
    /// every "no data" identically.
    ///
    /// # Errors
    /// Returns an error only if writing the cache fails.
    pub fn fetch(
        &self,
        base_url: &str,
        params: &[(&str, &str)],
        use_cache: bool,
    ) -> Result<Option<Vec<Record>>> {
        let original_url = format!("{base_url}?{}", self.build_query(params));
        let mut query_url = original_url.clone();
        let mut results: Vec<Record> = Vec::new();
        let mut this_page: u64 = 1;
        let mut pages: u64 = 0;

        while pages != this_page {
            let Some(raw) = self.page_body(&query_url, use_cache)? else {
                warn!("There was no API response for {query_url}");
                return Ok(None);
            };
            let envelope = match PagedResponse::parse(&raw) {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!("There is no data in the API response for {query_url}: {e}");
                    return Ok(None);
                }
            };
            if envelope.meta().total == 0 {
                warn!("There is no data in the API response for {query_url}");
                return Ok(None);
            }
            this_page = envelope.meta().page;
            pages = envelope.meta().pages;
            results.extend(envelope.into_records());
            // Always extend the original page-1 URL so page parameters do
            // not accumulate across iterations.
            query_url = format!("{original_url}&page={}", this_page + 1);
        }

        trim_ids(&mut results);
        Ok(Some(results))
    }

    /// Produce the raw body for one page URL, from cache when permitted and
    /// fresh, otherwise live.
    ///
    /// A live fetch always writes the cache, even when `use_cache` is false
    /// and even when every attempt failed (the absence is cached with
    /// today's day-count). Returns `Ok(None)` when no body is available.
    fn page_body(&self, url: &str, use_cache: bool) -> Result<Option<String>> {
        let today = daycount::today();
        if use_cache {
            if let Ok(entry) = self.cache.get(url) {
                if entry.is_fresh(today) {
                    debug!("Cache hit for {url}");
                    return Ok(entry.body);
                }
            }
        }
        let body = self.fetch_url(url);
        self.cache.set(url, CacheEntry::new(today, body.clone()))?;
        Ok(body)
    }

    /// GET a URL, retrying transport failures up to the attempt budget.
    ///
    /// Only transport-level failures are retried; the first response of any
    /// kind is accepted. Returns `None` when every attempt failed.
    fn fetch_url(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.tries {
            match self.transport.get(url) {
                Ok(body) => return Some(body),
                Err(e) => {
                    debug!("Attempt {attempt}/{} for {url} failed: {e}", self.tries);
                }
            }
        }
        None
    }

    /// Encode caller params plus the fixed `format` and `per_page` params,
    /// preserving order and duplicates.
    fn build_query(&self, params: &[(&str, &str)]) -> String {
        let per_page = self.per_page.to_string();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        serializer.append_pair("format", "json");
        serializer.append_pair("per_page", &per_page);
        serializer.finish()
    }
}

/// Trim leading/trailing whitespace from each record's `id` field, which
/// some endpoints pad.
fn trim_ids(records: &mut [Record]) {
    for record in records.iter_mut() {
        if let Some(serde_json::Value::String(id)) = record.get_mut("id") {
            let trimmed = id.trim();
            if trimmed.len() != id.len() {
                *id = trimmed.to_string();
            }
        }
    }
}
