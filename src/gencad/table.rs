// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Insertion-ordered tables keyed by record name.

use std::collections::HashMap;

pub trait Keyed {
    fn key(&self) -> &str;
}

/// Records in first-declaration order. Re-declaring a name keeps the
/// original slot.
#[derive(Debug, Clone)]
pub struct Table<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Table<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a record, replacing any earlier record with the same name.
    pub fn insert(&mut self, item: T) {
        self.insert_with(item, |slot, item| *slot = item);
    }

    /// Add a record, or hand it to `merge` along with the existing record
    /// of the same name.
    pub fn insert_with<F>(&mut self, item: T, merge: F)
    where
        F: FnOnce(&mut T, T),
    {
        match self.index.get(item.key()) {
            Some(&i) => merge(&mut self.items[i], item),
            None => {
                self.index.insert(item.key().to_string(), self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
