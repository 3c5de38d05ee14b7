use std::{collections::HashMap, rc::Rc};

use crate::content::{
    block::ContentBlock,
    block_parser::{classify_with, ClassifyOptions},
};

// Parse results keyed by the exact source string.
//
// Owned by the caller. Entries belong to one dataset (e.g. one loaded registry);
// announcing a different dataset drops them all.
pub struct ParseCache {
    options: ClassifyOptions,
    dataset: Option<String>,
    entries: HashMap<String, Rc<[ContentBlock]>>,

    hits: usize,
    misses: usize,
}

impl ParseCache {
    pub fn new(options: ClassifyOptions) -> Self {
        Self {
            options,
            dataset: None,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    pub fn dataset(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    // Returns true when the entries were dropped.
    pub fn begin_dataset(&mut self, key: &str) -> bool {
        if self.dataset.as_deref() == Some(key) {
            return false;
        }

        if !self.entries.is_empty() {
            log::debug!(
                "Dataset changed to {:?}, dropping {} cached parses",
                key,
                self.entries.len()
            );
        }

        self.dataset = Some(key.to_owned());
        self.clear();
        true
    }

    pub fn get_or_parse(&mut self, content: &str) -> Rc<[ContentBlock]> {
        if let Some(blocks) = self.entries.get(content) {
            self.hits += 1;
            return Rc::clone(blocks);
        }

        self.misses += 1;
        let blocks: Rc<[ContentBlock]> = classify_with(content, &self.options).into();
        self.entries.insert(content.to_owned(), Rc::clone(&blocks));
        blocks
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(ClassifyOptions::default())
    }
}
