//! Link extraction: unique `href` values from anchor elements.
//!
//! The extractor never looks up a document on its own. Callers hand it the
//! anchors (anything implementing [`Attributes`]) in document order and get
//! back each distinct non-empty href once, in first-occurrence order.

mod unique;

pub use unique::OrderedUnique;

/// Attribute name read from each anchor.
pub const HREF: &str = "href";

/// Attribute lookup by name, the only capability the extractor needs from an element.
pub trait Attributes {
    fn attr(&self, name: &str) -> Option<&str>;
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attr(&self, name: &str) -> Option<&str> {
        (**self).attr(name)
    }
}

impl Attributes for scraper::ElementRef<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

/// Collects the distinct, non-empty `href` values of `anchors`.
///
/// Anchors without the attribute, or with an empty value, are skipped. The
/// value is otherwise treated as an opaque string: no trimming, no resolution.
pub fn extract_hrefs<I>(anchors: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Attributes,
{
    let mut unique = OrderedUnique::default();
    let mut seen = 0usize;
    let mut skipped = 0usize;

    for anchor in anchors {
        seen += 1;
        match anchor.attr(HREF) {
            Some(href) if !href.is_empty() => {
                unique.insert(href);
            }
            _ => skipped += 1,
        }
    }

    tracing::debug!(
        anchors = seen,
        skipped,
        unique = unique.len(),
        "extracted hrefs"
    );
    unique.into_vec()
}
