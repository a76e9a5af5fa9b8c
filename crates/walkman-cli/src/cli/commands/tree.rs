//! `walkman tree [INPUT]` – directory tree of a page's links.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use walkman_core::document::{Document, DocumentSource};
use walkman_core::tree::{DirTree, DEFAULT_ROOT};

#[derive(Debug, Default)]
pub struct TreeArgs {
    pub input: Option<String>,
    pub root: Option<String>,
    pub hostname: Option<String>,
    pub from_tree: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn run_tree(args: TreeArgs) -> Result<()> {
    let tree = build_tree(&args)?;
    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            tree.write_to(BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!(nodes = tree.node_count(), path = %path.display(), "saved tree");
        }
        None => tree.write_to(io::stdout().lock())?,
    }
    Ok(())
}

/// Starts from a saved tree or a fresh root, then adds the document's hrefs.
///
/// With `--from-tree` a document is only read when INPUT is given, so the
/// saved tree can be re-rendered on its own.
fn build_tree(args: &TreeArgs) -> Result<DirTree> {
    let mut tree = match &args.from_tree {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read tree {}", path.display()))?;
            DirTree::parse(&text).with_context(|| format!("parse tree {}", path.display()))?
        }
        None => DirTree::new(args.root.as_deref().unwrap_or(DEFAULT_ROOT)),
    };

    if args.from_tree.is_none() || args.input.is_some() {
        let source = DocumentSource::from_arg(args.input.as_deref());
        let hrefs = Document::load(&source)?.hrefs();
        let added = tree.add_hrefs(&hrefs, args.hostname.as_deref());
        tracing::info!(added, source = %source.display_name(), "tree populated from document");
    }
    Ok(tree)
}
