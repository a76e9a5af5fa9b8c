//! Optional resolution of hrefs against a base URL.
//!
//! Raw attribute text is the default. Resolution only happens when the caller
//! supplies a base, and it can merge hrefs that were distinct as raw text
//! (`/a` and `https://example.com/a`), so the result is deduplicated again.

use url::Url;

use crate::error::WalkmanError;
use crate::extract::OrderedUnique;

/// Parses an absolute base URL.
pub fn parse_base(input: &str) -> Result<Url, WalkmanError> {
    Url::parse(input.trim()).map_err(|source| WalkmanError::InvalidBaseUrl {
        input: input.to_string(),
        source,
    })
}

/// Resolves each href against `base`, keeping the raw text when it cannot be joined.
pub fn resolve_hrefs(hrefs: &[String], base: &Url) -> Vec<String> {
    let unique: OrderedUnique = hrefs
        .iter()
        .map(|href| match base.join(href) {
            Ok(url) => url.to_string(),
            Err(err) => {
                tracing::debug!(href = %href, error = %err, "href not resolvable; keeping raw");
                href.clone()
            }
        })
        .collect();
    unique.into_vec()
}
