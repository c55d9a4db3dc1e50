use std::collections::BinaryHeap;

use dotlink_core::Pos;

/// Heap entry ordered by `(f, seq)`, smallest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    f: u32,
    seq: u64,
    pos: Pos,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of discovered cells keyed on `(f_score, insertion_sequence)`.
///
/// Every push takes the next value of a counter that is never reset, so
/// cells with equal `f` come out in the order they were inserted.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with priority `f`. Returns the insertion sequence used.
    pub fn push(&mut self, pos: Pos, f: u32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, pos });
        seq
    }

    /// Remove and return the cell with the smallest `(f, seq)`.
    pub fn pop(&mut self) -> Option<Pos> {
        self.heap.pop().map(|e| e.pos)
    }

    /// Smallest `f` currently queued.
    pub fn peek_f(&self) -> Option<u32> {
        self.heap.peek().map(|e| e.f)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pushes so far.
    pub fn inserted(&self) -> u64 {
        self.next_seq
    }
}
