//! Binary heap ordered by a caller-supplied comparison function.

use std::cmp::Ordering;

use crate::models::PendingDemand;

/// A max-priority queue whose ordering is a plain function, not a trait impl
/// on the element type.
///
/// The element that compares greatest under `order` is popped first. Elements
/// that compare equal are popped in insertion order.
///
/// # Examples
///
/// ```
/// use u_relief::allocation::PriorityQueue;
///
/// let mut q = PriorityQueue::new(|a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
/// q.push(('a', 1));
/// q.push(('b', 5));
/// q.push(('c', 5));
/// assert_eq!(q.pop(), Some(('b', 5)));
/// assert_eq!(q.pop(), Some(('c', 5)));
/// assert_eq!(q.pop(), Some(('a', 1)));
/// assert_eq!(q.pop(), None);
/// ```
pub struct PriorityQueue<T, F> {
    heap: Vec<Slot<T>>,
    order: F,
    next_seq: u64,
}

struct Slot<T> {
    seq: u64,
    item: T,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue using `order` to rank elements.
    pub fn new(order: F) -> Self {
        Self {
            heap: Vec::new(),
            order,
            next_seq: 0,
        }
    }

    /// Inserts an element.
    pub fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Slot { seq, item });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the highest-ranked element.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top.item)
    }

    /// Returns the highest-ranked element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|s| &s.item)
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains the queue into a vector in unspecified order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().map(|s| s.item).collect()
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        let (sa, sb) = (&self.heap[a], &self.heap[b]);
        match (self.order)(&sa.item, &sb.item) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => sa.seq < sb.seq,
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.outranks(left, best) {
                best = left;
            }
            if right < len && self.outranks(right, best) {
                best = right;
            }
            if best == i {
                break;
            }
            self.heap.swap(i, best);
            i = best;
        }
    }
}

/// Ranks pending demand by remaining units, largest first.
pub fn by_remaining_demand(a: &PendingDemand, b: &PendingDemand) -> Ordering {
    a.remaining.cmp(&b.remaining)
}
