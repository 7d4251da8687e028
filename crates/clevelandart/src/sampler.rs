// SPDX-License-Identifier: GPL-3.0-or-later

//! Uniform random selection over a remote, paginated collection.
//!
//! There is no random-record endpoint, so sampling takes two searches: one
//! with `limit=1` to learn how many records match, and one that skips a
//! uniformly drawn number of records and keeps the single record returned.
//! The collection can change between the two requests, so an empty second
//! page is reported instead of indexed into.

use rand::Rng;
use tracing::debug;

use crate::error::{ClevelandArtError, Result};
use crate::models::{Artwork, ArtworkSearchResult};
use crate::query::SearchParameters;

/// Parameters for the size probe. The sample request reuses them with `skip` set.
pub fn probe_parameters(has_image: bool) -> SearchParameters {
    SearchParameters::default().has_image(has_image).limit(1)
}

/// Parameters for fetching the record at `offset`.
pub fn sample_parameters(has_image: bool, offset: u64) -> SearchParameters {
    // The service reports totals far below i64::MAX.
    let skip = i64::try_from(offset).unwrap_or(i64::MAX);
    probe_parameters(has_image).skip(skip)
}

/// Draw an offset uniformly from `[0, total)`.
pub fn draw_offset<R: Rng>(total: u64, rng: &mut R) -> Result<u64> {
    if total == 0 {
        return Err(ClevelandArtError::NoMatchingRecords);
    }
    let offset = rng.gen_range(0..total);
    debug!(target: "clevelandart", total, offset, "drew random offset");
    Ok(offset)
}

/// Take the record from the page fetched at `offset`.
pub fn take_sampled(result: ArtworkSearchResult, offset: u64) -> Result<Artwork> {
    result
        .data
        .into_iter()
        .next()
        .ok_or(ClevelandArtError::NoRecordAtOffset { offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_draw_offset_empty_collection() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            draw_offset(0, &mut rng),
            Err(ClevelandArtError::NoMatchingRecords)
        ));
    }

    #[test]
    fn test_draw_offset_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for total in [1u64, 2, 10, 35_000] {
            for _ in 0..200 {
                let offset = draw_offset(total, &mut rng).unwrap();
                assert!(offset < total, "offset {offset} out of range for {total}");
            }
        }
    }

    #[test]
    fn test_draw_offset_single_record_is_zero() {
        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(draw_offset(1, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_draw_offset_is_deterministic_for_seed() {
        let first = draw_offset(1_000, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = draw_offset(1_000, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_offset_varies() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(draw_offset(1_000, &mut rng).unwrap());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_sample_parameters() {
        let params = sample_parameters(true, 12);
        assert_eq!(
            params.to_query_string().unwrap(),
            "has_image=1&indent=0&limit=1&q=&skip=12"
        );
    }

    #[test]
    fn test_take_sampled_empty_page() {
        let page: ArtworkSearchResult =
            serde_json::from_value(json!({ "info": { "total": 4 }, "data": [] })).unwrap();
        match take_sampled(page, 3) {
            Err(ClevelandArtError::NoRecordAtOffset { offset }) => assert_eq!(offset, 3),
            other => panic!("expected NoRecordAtOffset, got: {other:?}"),
        }
    }

    #[test]
    fn test_take_sampled_first_record() {
        let page: ArtworkSearchResult = serde_json::from_value(json!({
            "info": { "total": 4 },
            "data": [{ "id": 11 }, { "id": 12 }]
        }))
        .unwrap();
        assert_eq!(take_sampled(page, 0).unwrap().id, 11);
    }
}
