// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking counterpart of [`crate::ClevelandArtClient`].
//!
//! Each call blocks the current thread for the duration of its round trip.
//! Do not use it from inside an async runtime; build it with
//! [`ClevelandArtClientBuilder::build_blocking`].

use crate::client::{artwork_url, check_status, decode, search_url, ClevelandArtClientBuilder};
use crate::error::{DecodeError, Result};
use crate::models::{Artwork, ArtworkEnvelope, ArtworkId, ArtworkSearchResult, Fetched};
use crate::query::SearchParameters;
use crate::sampler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

#[derive(Debug, Clone)]
pub struct ClevelandArtClient {
    client: Client,
    base_url: Url,
}

impl ClevelandArtClient {
    pub fn new() -> Result<Self> {
        Self::builder().build_blocking()
    }

    /// The shared builder; finish it with `build_blocking()`.
    pub fn builder() -> ClevelandArtClientBuilder {
        ClevelandArtClientBuilder::default()
    }

    pub(crate) fn from_parts(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn artwork(&self, id: impl Into<ArtworkId>) -> Result<Artwork> {
        Ok(self.artwork_with_raw(id)?.value)
    }

    pub fn artwork_with_raw(&self, id: impl Into<ArtworkId>) -> Result<Fetched<Artwork>> {
        let id = id.into();
        let url = artwork_url(&self.base_url, &id)?;
        debug!(target: "clevelandart", id = %id, "fetching artwork");
        let fetched: Fetched<ArtworkEnvelope> = self.get(url)?;
        Ok(fetched.map(|envelope| envelope.data))
    }

    pub fn search(&self, params: &SearchParameters) -> Result<ArtworkSearchResult> {
        Ok(self.search_with_raw(params)?.value)
    }

    #[instrument(skip(self), level = "debug")]
    pub fn search_with_raw(
        &self,
        params: &SearchParameters,
    ) -> Result<Fetched<ArtworkSearchResult>> {
        let url = search_url(&self.base_url, params)?;
        self.get(url)
    }

    pub fn random_artwork(&self, has_image: bool) -> Result<Artwork> {
        let mut rng = StdRng::from_entropy();
        self.random_artwork_with(has_image, &mut rng)
    }

    /// Pick a uniformly random artwork, drawing the offset from `rng`.
    pub fn random_artwork_with<R: Rng>(
        &self,
        has_image: bool,
        rng: &mut R,
    ) -> Result<Artwork> {
        let probe = self.search(&sampler::probe_parameters(has_image))?;
        let offset = sampler::draw_offset(probe.info.total, rng)?;
        let page = self.search(&sampler::sample_parameters(has_image, offset))?;
        sampler::take_sampled(page, offset)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Fetched<T>> {
        trace!(target: "clevelandart", "GET {}", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        debug!(target: "clevelandart", "response status: {}", status);
        check_status(status)?;

        let raw = response.text().map_err(DecodeError::Body)?;
        trace!(target: "clevelandart", "response body: {}", raw);

        decode(raw)
    }
}
