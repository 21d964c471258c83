//! Keyed collections of visual marks.
//!
//! A view hands its freshly computed marks to [`Layer::reconcile`], which
//! matches them to the previous render by key and reports what entered,
//! changed and left. Rendering the same marks twice changes nothing, so
//! repeated redraws never accumulate elements.

use std::collections::HashMap;

/// A mark with a stable identity across renders.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Result of reconciling one render against the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub entered: Vec<String>,
    pub updated: Vec<String>,
    pub exited: Vec<String>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.updated.is_empty() && self.exited.is_empty()
    }
}

/// The current marks of one chart, at most one per key.
#[derive(Debug, Clone)]
pub struct Layer<M> {
    marks: Vec<M>,
    index: HashMap<String, usize>,
}

impl<M> Default for Layer<M> {
    fn default() -> Self {
        Self {
            marks: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<M: Keyed + PartialEq> Layer<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the marks with `next`, keyed. If `next` repeats a key only the
    /// first mark is kept.
    pub fn reconcile(&mut self, next: Vec<M>) -> Patch {
        let mut patch = Patch::default();
        let mut marks: Vec<M> = Vec::with_capacity(next.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(next.len());

        for mark in next {
            if index.contains_key(mark.key()) {
                log::warn!("[gapviz] layer: Dropping duplicate mark '{}'", mark.key());
                continue;
            }
            match self.get(mark.key()) {
                None => patch.entered.push(mark.key().to_string()),
                Some(previous) if *previous != mark => patch.updated.push(mark.key().to_string()),
                Some(_) => {}
            }
            index.insert(mark.key().to_string(), marks.len());
            marks.push(mark);
        }

        for old in &self.marks {
            if !index.contains_key(old.key()) {
                patch.exited.push(old.key().to_string());
            }
        }

        self.marks = marks;
        self.index = index;
        patch
    }

    pub fn get(&self, key: &str) -> Option<&M> {
        self.index.get(key).map(|&i| &self.marks[i])
    }

    pub fn marks(&self) -> &[M] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
