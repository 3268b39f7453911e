//! Minimum-priority containers used as the open set of the search.
//!
//! Two implementations share the [Frontier] contract: [PriorityQueue] scans its entries
//! linearly on every dequeue, [HeapQueue] keeps them in a [BinaryHeap]. Both hand out the
//! entry with the numerically lowest priority and break ties in favour of the entry that was
//! enqueued first, so swapping one for the other never changes a search result.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Open set abstraction used by [Pathfinder](crate::astar::Pathfinder).
pub trait Frontier<T>: Default {
    /// Inserts an item unconditionally. Duplicates are allowed.
    fn enqueue(&mut self, item: T, priority: i32);
    /// Removes the item with the lowest priority or returns [None] if the frontier is empty.
    fn try_dequeue(&mut self) -> Option<T>;
    /// Number of queued entries, stale duplicates included.
    fn len(&self) -> usize;

    /// Removes the item with the lowest priority.
    ///
    /// # Panics
    /// Panics if the frontier is empty; callers are expected to check [len](Self::len) first.
    fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Some(item) => item,
            None => panic!("dequeue called on an empty priority queue"),
        }
    }
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unordered list of `(item, priority)` pairs. Every dequeue is a linear scan for the
/// minimum, which is fine for the grid sizes this crate targets.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    elements: Vec<(T, i32)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> PriorityQueue<T> {
        PriorityQueue {
            elements: Vec::new(),
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::default()
    }

    /// Index of the first entry holding the minimum priority.
    fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, (_, priority)) in self.elements.iter().enumerate() {
            match best {
                // Only a strictly smaller priority replaces the candidate, which keeps the
                // earliest arrival among equals.
                Some(b) if *priority >= self.elements[b].1 => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<i32> {
        self.best_index().map(|i| self.elements[i].1)
    }
}

impl<T> Frontier<T> for PriorityQueue<T> {
    fn enqueue(&mut self, item: T, priority: i32) {
        self.elements.push((item, priority));
    }
    fn try_dequeue(&mut self) -> Option<T> {
        // `remove` rather than `swap_remove`: the remaining entries must keep arrival order.
        self.best_index().map(|i| self.elements.remove(i).0)
    }
    fn len(&self) -> usize {
        self.elements.len()
    }
}

#[derive(Clone, Debug)]
struct SmallestPriorityHolder<T> {
    priority: i32,
    sequence: u64,
    item: T,
}

impl<T> Eq for SmallestPriorityHolder<T> {}

impl<T> PartialEq for SmallestPriorityHolder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> PartialOrd for SmallestPriorityHolder<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SmallestPriorityHolder<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse on priority, then favour the older entry
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Binary heap frontier with the same contract and tie-break as [PriorityQueue].
#[derive(Clone, Debug)]
pub struct HeapQueue<T> {
    heap: BinaryHeap<SmallestPriorityHolder<T>>,
    next_sequence: u64,
}

impl<T> Default for HeapQueue<T> {
    fn default() -> HeapQueue<T> {
        HeapQueue {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<T> HeapQueue<T> {
    pub fn new() -> HeapQueue<T> {
        HeapQueue::default()
    }
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|h| h.priority)
    }
}

impl<T> Frontier<T> for HeapQueue<T> {
    fn enqueue(&mut self, item: T, priority: i32) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }
    fn try_dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|h| h.item)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<Q: Frontier<char>>(mut queue: Q) -> Vec<char> {
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.dequeue());
        }
        out
    }

    fn filled<Q: Frontier<char>>(entries: &[(char, i32)]) -> Q {
        let mut queue = Q::default();
        for (item, priority) in entries {
            queue.enqueue(*item, *priority);
        }
        queue
    }

    const PERMUTATION: [(char, i32); 6] = [
        ('d', 4),
        ('a', 1),
        ('f', 6),
        ('c', 3),
        ('e', 5),
        ('b', 2),
    ];

    #[test]
    fn extraction_order_is_non_decreasing() {
        assert_eq!(
            drain(filled::<PriorityQueue<char>>(&PERMUTATION)),
            vec!['a', 'b', 'c', 'd', 'e', 'f']
        );
        assert_eq!(
            drain(filled::<HeapQueue<char>>(&PERMUTATION)),
            vec!['a', 'b', 'c', 'd', 'e', 'f']
        );
    }

    /// Counts track enqueues minus dequeues, duplicates included.
    #[test]
    fn count_tracks_operations() {
        let mut queue: PriorityQueue<char> = PriorityQueue::new();
        queue.enqueue('x', 3);
        queue.enqueue('x', 3);
        queue.enqueue('y', 1);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), 'y');
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), 'x');
        assert_eq!(queue.dequeue(), 'x');
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_resolve_to_earliest_arrival() {
        let entries = [('p', 2), ('q', 1), ('r', 2), ('s', 1), ('t', 2)];
        let expected = vec!['q', 's', 'p', 'r', 't'];
        assert_eq!(drain(filled::<PriorityQueue<char>>(&entries)), expected);
        assert_eq!(drain(filled::<HeapQueue<char>>(&entries)), expected);
    }

    /// Interleaved enqueues and dequeues produce the same sequence in both queues.
    #[test]
    fn linear_and_heap_agree_when_interleaved() {
        let mut linear: PriorityQueue<usize> = PriorityQueue::new();
        let mut heap: HeapQueue<usize> = HeapQueue::new();
        let mut out_linear = Vec::new();
        let mut out_heap = Vec::new();
        for i in 0..50usize {
            let priority = ((i * 7) % 5) as i32;
            linear.enqueue(i, priority);
            heap.enqueue(i, priority);
            if i % 3 == 2 {
                out_linear.push(linear.dequeue());
                out_heap.push(heap.dequeue());
            }
        }
        assert_eq!(linear.peek_priority(), heap.peek_priority());
        while let Some(i) = linear.try_dequeue() {
            out_linear.push(i);
        }
        while let Some(i) = heap.try_dequeue() {
            out_heap.push(i);
        }
        assert_eq!(out_linear, out_heap);
    }

    #[test]
    fn try_dequeue_on_empty_is_none() {
        let mut queue: HeapQueue<u8> = HeapQueue::new();
        assert!(queue.try_dequeue().is_none());
        assert!(queue.peek_priority().is_none());
    }

    #[test]
    #[should_panic(expected = "empty priority queue")]
    fn dequeue_on_empty_panics() {
        let mut queue: PriorityQueue<u8> = PriorityQueue::new();
        queue.dequeue();
    }

    #[test]
    fn cloned_heap_drains_identically() {
        let mut queue = HeapQueue::new();
        for (item, priority) in [('a', 3), ('b', 1), ('c', 3), ('d', 1)] {
            queue.enqueue(item, priority);
        }
        let mut copy = queue.clone();
        assert!(format!("{:?}", copy).contains("HeapQueue"));
        // Arrival order survives the clone, including after new insertions
        queue.enqueue('e', 1);
        copy.enqueue('e', 1);
        let drain = |q: &mut HeapQueue<char>| {
            std::iter::from_fn(|| q.try_dequeue()).collect::<String>()
        };
        assert_eq!(drain(&mut queue), "bdeac");
        assert_eq!(drain(&mut copy), "bdeac");
    }
}
