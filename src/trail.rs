// Bounded history of recently emitted segments, oldest at the front.

use crate::segment::Segment;
use std::collections::VecDeque;

pub struct TrailBuffer {
    segments: VecDeque<Segment>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self { segments: VecDeque::new() }
    }

    /// Append the newest segment at the back. O(1) amortized.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push_back(segment);
    }

    /// Evict from the front until at most `max_count` segments remain.
    /// Visual: the oldest lines disappear first.
    pub fn trim_to(&mut self, max_count: usize) {
        while self.segments.len() > max_count {
            self.segments.pop_front();
        }
    }

    /// Drop everything at once.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Oldest-to-newest iteration; this is the draw order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.segments.iter_mut()
    }
}
