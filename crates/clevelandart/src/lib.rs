// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the Cleveland Museum of Art Open Access API.
//!
//! This crate fetches artwork records by numeric id or accession number,
//! runs parameterized searches against the collection, and picks a
//! uniformly random artwork by probing the collection size and then
//! requesting a single record at a random offset.

pub mod blocking;
pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod sampler;

pub use client::{ClevelandArtClient, ClevelandArtClientBuilder, DEFAULT_BASE_URL};
pub use error::{ClevelandArtError, DecodeError, Result};
pub use models::{
    Artwork, ArtworkId, ArtworkSearchResult, Creator, Fetched, ImageRendition, Images, SearchInfo,
};
pub use query::SearchParameters;
