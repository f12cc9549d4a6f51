//! One "has at least one edge" mark per vertex.
//!
//! The mark gates acceptance only; it does not bound degree.

use super::ForestGate;

pub(super) struct VisitedMarks {
    marks: Vec<bool>,
}

impl VisitedMarks {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![false; vertex_count],
        }
    }

    fn is_marked(&self, vertex: usize) -> bool {
        self.marks.get(vertex).copied().unwrap_or(true)
    }

    fn mark(&mut self, vertex: usize) {
        if let Some(slot) = self.marks.get_mut(vertex) {
            *slot = true;
        }
    }
}

impl ForestGate for VisitedMarks {
    fn admit(&mut self, source: usize, target: usize) -> bool {
        if self.is_marked(source) && self.is_marked(target) {
            return false;
        }
        self.mark(source);
        self.mark(target);
        true
    }
}
