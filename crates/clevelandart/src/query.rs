// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Serialize, Serializer};

use crate::error::Result;

/// Parameters for the artwork search endpoint.
///
/// Fields are declared in alphabetical order of their query keys, which is
/// the order they are written to the query string. Every key is sent on every
/// request; unset values go out as `0` or an empty string. Ranges are not
/// checked here, the service rejects what it does not accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParameters {
    /// Only return artworks that have an image.
    #[serde(serialize_with = "serialize_flag")]
    pub has_image: bool,
    /// Ask the service to pretty-print its JSON.
    #[serde(serialize_with = "serialize_flag")]
    pub indent: bool,
    pub limit: i64,
    /// Free-text query.
    pub q: String,
    /// Number of leading records to discard.
    pub skip: i64,
}

impl SearchParameters {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn has_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    pub fn indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = skip;
        self
    }

    /// Render as a URL-encoded query string with a fixed key order.
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

fn serialize_flag<S>(flag: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_send_every_key() {
        let query = SearchParameters::default().to_query_string().unwrap();
        assert_eq!(query, "has_image=0&indent=0&limit=0&q=&skip=0");
    }

    #[test]
    fn test_key_order_independent_of_setter_order() {
        let a = SearchParameters::new("monet")
            .skip(20)
            .limit(5)
            .has_image(true)
            .indent(true);
        let b = SearchParameters::new("monet")
            .indent(true)
            .has_image(true)
            .limit(5)
            .skip(20);

        let expected = "has_image=1&indent=1&limit=5&q=monet&skip=20";
        assert_eq!(a.to_query_string().unwrap(), expected);
        assert_eq!(b.to_query_string().unwrap(), expected);
    }

    #[test]
    fn test_free_text_is_url_encoded() {
        let query = SearchParameters::new("water lilies & bridge")
            .limit(1)
            .to_query_string()
            .unwrap();
        assert_eq!(
            query,
            "has_image=0&indent=0&limit=1&q=water+lilies+%26+bridge&skip=0"
        );
    }

    #[test]
    fn test_out_of_range_values_are_forwarded() {
        let query = SearchParameters::default()
            .limit(-1)
            .skip(-50)
            .to_query_string()
            .unwrap();
        assert_eq!(query, "has_image=0&indent=0&limit=-1&q=&skip=-50");
    }
}
