// SPDX-License-Identifier: GPL-3.0-or-later

use crate::blocking;
use crate::error::{ClevelandArtError, DecodeError, Result};
use crate::models::{Artwork, ArtworkEnvelope, ArtworkId, ArtworkSearchResult, Fetched};
use crate::query::SearchParameters;
use crate::sampler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use url::Url;

/// Public Open Access API root.
pub const DEFAULT_BASE_URL: &str = "https://openaccess-api.clevelandart.org/api";
const USER_AGENT: &str = concat!("clevelandart-rs/", env!("CARGO_PKG_VERSION"));

/// Cleveland Museum of Art Open Access API client.
///
/// Every operation issues exactly one GET (two for random picks) and returns
/// the first failure it meets. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ClevelandArtClient {
    client: Client,
    base_url: Url,
}

impl ClevelandArtClient {
    /// Create a client against the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> ClevelandArtClientBuilder {
        ClevelandArtClientBuilder::default()
    }

    /// Fetch one artwork by numeric id or accession number.
    ///
    /// # Example
    /// ```no_run
    /// # use clevelandart::{ArtworkId, ClevelandArtClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ClevelandArtClient::new()?;
    /// let by_id = client.artwork(151904).await?;
    /// let by_accession = client.artwork("1927.1984").await?;
    /// assert_eq!(by_id.id, by_accession.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn artwork(&self, id: impl Into<ArtworkId>) -> Result<Artwork> {
        Ok(self.artwork_with_raw(id).await?.value)
    }

    /// Like [`artwork`](Self::artwork), also returning the response body.
    pub async fn artwork_with_raw(&self, id: impl Into<ArtworkId>) -> Result<Fetched<Artwork>> {
        let id = id.into();
        let url = artwork_url(&self.base_url, &id)?;
        debug!(target: "clevelandart", id = %id, "fetching artwork");
        let fetched: Fetched<ArtworkEnvelope> = self.get(url).await?;
        Ok(fetched.map(|envelope| envelope.data))
    }

    /// Search the collection.
    ///
    /// # Example
    /// ```no_run
    /// # use clevelandart::{ClevelandArtClient, SearchParameters};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ClevelandArtClient::new()?;
    /// let params = SearchParameters::new("monet").has_image(true).limit(10);
    /// let result = client.search(&params).await?;
    /// println!("{} matches", result.info.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, params: &SearchParameters) -> Result<ArtworkSearchResult> {
        Ok(self.search_with_raw(params).await?.value)
    }

    /// Like [`search`](Self::search), also returning the response body.
    #[instrument(skip(self), level = "debug")]
    pub async fn search_with_raw(
        &self,
        params: &SearchParameters,
    ) -> Result<Fetched<ArtworkSearchResult>> {
        let url = search_url(&self.base_url, params)?;
        self.get(url).await
    }

    /// Pick a uniformly random artwork using a freshly seeded generator.
    pub async fn random_artwork(&self, has_image: bool) -> Result<Artwork> {
        let mut rng = StdRng::from_entropy();
        self.random_artwork_with(has_image, &mut rng).await
    }

    /// Pick a uniformly random artwork, drawing the offset from `rng`.
    ///
    /// Fails with [`ClevelandArtError::NoMatchingRecords`] when nothing
    /// matches, and with [`ClevelandArtError::NoRecordAtOffset`] when the
    /// collection shrank between the two requests.
    pub async fn random_artwork_with<R: Rng>(
        &self,
        has_image: bool,
        rng: &mut R,
    ) -> Result<Artwork> {
        let probe = self.search(&sampler::probe_parameters(has_image)).await?;
        let offset = sampler::draw_offset(probe.info.total, rng)?;
        let page = self
            .search(&sampler::sample_parameters(has_image, offset))
            .await?;
        sampler::take_sampled(page, offset)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Fetched<T>> {
        trace!(target: "clevelandart", "GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(target: "clevelandart", "response status: {}", status);
        check_status(status)?;

        let raw = response.text().await.map_err(DecodeError::Body)?;
        trace!(target: "clevelandart", "response body: {}", raw);

        decode(raw)
    }
}

/// Builder shared by the async and blocking clients.
#[derive(Debug, Clone)]
pub struct ClevelandArtClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClevelandArtClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClevelandArtClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a whole-request timeout. No timeout is applied unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the async client.
    pub fn build(self) -> Result<ClevelandArtClient> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ClevelandArtClient {
            client: builder.build().map_err(ClevelandArtError::ClientBuild)?,
            base_url,
        })
    }

    /// Build the blocking client.
    ///
    /// Must not be called from inside an async runtime.
    pub fn build_blocking(self) -> Result<blocking::ClevelandArtClient> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::blocking::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(blocking::ClevelandArtClient::from_parts(
            builder.build().map_err(ClevelandArtError::ClientBuild)?,
            base_url,
        ))
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ClevelandArtError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ClevelandArtError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

/// `{base}/artworks/{id}`, with the id as a single encoded path segment.
pub(crate) fn artwork_url(base: &Url, id: &ArtworkId) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| ClevelandArtError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push("artworks")
        .push(&id.to_string());
    Ok(url)
}

/// `{base}/artworks/?{query}`.
pub(crate) fn search_url(base: &Url, params: &SearchParameters) -> Result<Url> {
    let query = params.to_query_string()?;
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClevelandArtError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push("artworks")
        .push("");
    url.set_query(Some(&query));
    Ok(url)
}

pub(crate) fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClevelandArtError::FetchFailed { status })
    }
}

pub(crate) fn decode<T: DeserializeOwned>(raw: String) -> Result<Fetched<T>> {
    let value = serde_json::from_str(&raw).map_err(DecodeError::from)?;
    Ok(Fetched { value, raw })
}
