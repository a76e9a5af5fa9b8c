//! Insert-if-absent container that keeps first-insertion order.

use std::collections::HashSet;

/// Ordered set of strings: a sequence plus a membership set.
#[derive(Debug, Default, Clone)]
pub struct OrderedUnique {
    order: Vec<String>,
    members: HashSet<String>,
}

impl OrderedUnique {
    /// Appends `value` unless it is already present. Returns true if it was added.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.members.contains(value) {
            return false;
        }
        self.members.insert(value.to_string());
        self.order.push(value.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: AsRef<str>> FromIterator<S> for OrderedUnique {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut unique = OrderedUnique::default();
        for value in iter {
            unique.insert(value.as_ref());
        }
        unique
    }
}
