//! HTML document loading and anchor enumeration.

use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::WalkmanError;
use crate::extract::extract_hrefs;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector is valid - this is a bug"));

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// Maps a CLI argument to a source; `None` and `-` mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => DocumentSource::Stdin,
            Some(path) => DocumentSource::File(PathBuf::from(path)),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::Stdin => "<stdin>".to_string(),
            DocumentSource::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole document. Bytes that are not valid UTF-8 (legacy
    /// encodings such as windows-1252) are replaced, never rejected.
    pub fn read_to_string(&self) -> Result<String, WalkmanError> {
        let read = match self {
            DocumentSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
            }
            DocumentSource::File(path) => fs::read(path),
        };
        let bytes = read.map_err(|source| WalkmanError::ReadDocument {
            path: self.display_name(),
            source,
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(source = %self.display_name(), "document is not UTF-8; decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        tracing::debug!(source = %self.display_name(), bytes = text.len(), "read document");
        Ok(text)
    }
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses `html` leniently; malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn load(source: &DocumentSource) -> Result<Self, WalkmanError> {
        let text = source.read_to_string()?;
        Ok(Self::parse(&text))
    }

    /// Every `a` element in document order, except those in inert `<template>` content.
    pub fn anchors(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.html
            .select(&ANCHOR_SELECTOR)
            .filter(|anchor| !in_template(anchor))
    }

    /// Distinct non-empty hrefs of all anchors, in first-occurrence order.
    pub fn hrefs(&self) -> Vec<String> {
        extract_hrefs(self.anchors())
    }
}

fn in_template(element: &ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| el.name() == "template")
    })
}
