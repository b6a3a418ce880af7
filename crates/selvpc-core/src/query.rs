//! Query-string encoding for list options.
//!
//! List filters are boolean flags; this builder keeps only the ones that are
//! set and appends them to a resource URL.

use url::Url;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append `key=true` only when the flag is set.
    pub fn push_flag(&mut self, key: &'static str, enabled: bool) {
        if enabled {
            self.pairs.push((key, "true".to_string()));
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Append the collected pairs to `url`. An empty builder leaves the URL
    /// without a `?`.
    pub fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            query.append_pair(key, value);
        }
    }
}
