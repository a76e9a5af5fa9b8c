//! Directory tree of a site, built from extracted hrefs.
//!
//! Children are kept sorted by name. The saved form is one `- name` line per
//! node, indented two spaces per level, and [`DirTree::parse`] reads it back.

mod host;

pub use host::strip_hostname;

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::WalkmanError;

/// Name of the root node when none is given.
pub const DEFAULT_ROOT: &str = "/";

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    name: String,
    children: BTreeMap<String, DirTree>,
}

impl DirTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Root named `root` with one child per usable href.
    pub fn from_hrefs<S: AsRef<str>>(root: &str, hrefs: &[S], hostname: Option<&str>) -> Self {
        let mut tree = Self::new(root);
        tree.add_hrefs(hrefs, hostname);
        tree
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> impl Iterator<Item = &DirTree> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&DirTree> {
        self.children.get(name)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(DirTree::node_count).sum::<usize>()
    }

    /// Returns the child called `name`, creating it if absent.
    pub fn add_child(&mut self, name: &str) -> &mut DirTree {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| DirTree::new(name))
    }

    /// Adds hrefs as direct children and returns how many were new.
    ///
    /// Hrefs containing `#` (in-page fragments) are skipped, the hostname is
    /// stripped when given, and entries that are empty, equal to this node's
    /// name, or span several lines are dropped.
    pub fn add_hrefs<S: AsRef<str>>(&mut self, hrefs: &[S], hostname: Option<&str>) -> usize {
        let mut added = 0usize;
        for href in hrefs {
            let href = href.as_ref();
            if href.contains('#') {
                continue;
            }
            let stripped = match hostname {
                Some(host) => strip_hostname(href, host),
                None => href.to_string(),
            };
            let name = stripped.trim();
            if name.is_empty() || name == self.name || name.contains(['\n', '\r']) {
                continue;
            }
            if !self.children.contains_key(name) {
                self.add_child(name);
                added += 1;
            }
        }
        tracing::debug!(root = %self.name, hrefs = hrefs.len(), added, "added hrefs to tree");
        added
    }

    /// Merges `other` into this node's children, recursively by name.
    pub fn merge_child(&mut self, other: DirTree) {
        match self.children.get_mut(&other.name) {
            Some(existing) => {
                for grandchild in other.children.into_values() {
                    existing.merge_child(grandchild);
                }
            }
            None => {
                self.children.insert(other.name.clone(), other);
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        out.push_str(&INDENT.repeat(depth));
        out.push_str("- ");
        out.push_str(&self.name);
        out.push('\n');
        for child in self.children() {
            child.render_into(out, depth + 1);
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), WalkmanError> {
        out.write_all(self.render().as_bytes())
            .map_err(WalkmanError::Write)?;
        out.flush().map_err(WalkmanError::Write)
    }

    /// Reads a tree saved by [`DirTree::render`].
    ///
    /// Nesting follows the column of each line's `-`: deeper than the line
    /// above means child, otherwise the line closes entries until it finds a
    /// shallower parent. Blank lines are ignored; the first entry is the root
    /// and must be the only entry at its column.
    pub fn parse(text: &str) -> Result<DirTree, WalkmanError> {
        let mut stack: Vec<(usize, DirTree)> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let body = raw.trim_start();
            if body.is_empty() {
                continue;
            }
            let column = raw.len() - body.len();
            let name = body
                .strip_prefix('-')
                .ok_or_else(|| invalid(line, "expected \"- name\""))?
                .trim();
            if name.is_empty() {
                return Err(invalid(line, "entry has no name"));
            }

            while stack.last().is_some_and(|(top, _)| *top >= column) {
                if stack.len() == 1 {
                    return Err(invalid(line, "second root entry"));
                }
                fold_top(&mut stack);
            }
            stack.push((column, DirTree::new(name)));
        }

        while stack.len() > 1 {
            fold_top(&mut stack);
        }
        stack
            .pop()
            .map(|(_, root)| root)
            .ok_or_else(|| invalid(1, "tree is empty"))
    }
}

/// Pops the deepest open entry into its parent.
fn fold_top(stack: &mut Vec<(usize, DirTree)>) {
    if let Some((_, node)) = stack.pop() {
        if let Some((_, parent)) = stack.last_mut() {
            parent.merge_child(node);
        }
    }
}

fn invalid(line: usize, reason: &str) -> WalkmanError {
    WalkmanError::InvalidTree {
        line,
        reason: reason.to_string(),
    }
}
