// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, collections::{BinaryHeap, HashMap}, hash::Hash};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order { LowestFirst, HighestFirst }

struct Entry<T> {
	priority: i64,
	seq: u64,
	order: Order,
	value: T,
}

impl<T> Ord for Entry<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		let by_priority = self.priority.cmp(&other.priority);
		match self.order {
			Order::LowestFirst => by_priority.reverse(),
			Order::HighestFirst => by_priority,
		}.then_with(|| other.seq.cmp(&self.seq))
	}
}

impl<T> PartialOrd for Entry<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> PartialEq for Entry<T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T> Eq for Entry<T> {}


/// A priority queue holding each value at most once. Re-inserting a queued value
/// updates its priority; the superseded heap entry is skipped when it surfaces.
pub(crate) struct PriorityQueue<T> {
	order: Order,
	heap: BinaryHeap<Entry<T>>,
	// The live `seq` of each queued value
	live: HashMap<T, u64>,
	next_seq: u64,
}

impl<T: Clone + Eq + Hash> PriorityQueue<T> {
	pub(crate) fn new(order: Order) -> Self {
		Self { order, heap: BinaryHeap::new(), live: HashMap::new(), next_seq: 0 }
	}

	/// Returns `true` if `value` was not yet queued.
	pub(crate) fn insert(&mut self, value: T, priority: i64) -> bool {
		let seq = self.next_seq;
		self.next_seq += 1;
		let is_new = self.live.insert(value.clone(), seq).is_none();
		self.heap.push(Entry { priority, seq, order: self.order, value });
		is_new
	}

	pub(crate) fn next(&mut self) -> Option<(T, i64)> {
		while let Some(Entry { priority, seq, value, .. }) = self.heap.pop() {
			if self.live.get(&value) != Some(&seq) { continue }
			self.live.remove(&value);
			return Some((value, priority))
		}
		None
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.live.is_empty()
	}

	pub(crate) fn len(&self) -> usize {
		self.live.len()
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for PriorityQueue<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.live.keys()).finish()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowest_first() {
		let mut queue = PriorityQueue::new(Order::LowestFirst);
		assert!(queue.is_empty());
		assert!(queue.insert("c", 30));
		assert!(queue.insert("a", 10));
		assert!(queue.insert("b", 20));
		assert_eq!(queue.len(), 3);
		assert_eq!(queue.next(), Some(("a", 10)));
		assert_eq!(queue.next(), Some(("b", 20)));
		assert_eq!(queue.next(), Some(("c", 30)));
		assert_eq!(queue.next(), None);
		assert!(queue.is_empty());
	}

	#[test]
	fn highest_first_with_ties() {
		let mut queue = PriorityQueue::new(Order::HighestFirst);
		queue.insert(1, 5);
		queue.insert(2, 7);
		queue.insert(3, 5);
		assert_eq!(queue.next(), Some((2, 7)));
		assert_eq!(queue.next(), Some((1, 5)));
		assert_eq!(queue.next(), Some((3, 5)));
	}

	#[test]
	fn update_priority() {
		let mut queue = PriorityQueue::new(Order::LowestFirst);
		queue.insert('x', 50);
		queue.insert('y', 40);
		assert!(!queue.insert('x', 10));
		assert_eq!(queue.len(), 2);
		assert_eq!(queue.next(), Some(('x', 10)));
		assert_eq!(queue.next(), Some(('y', 40)));
		assert_eq!(queue.next(), None);

		// Raising a priority works too
		queue.insert('z', 1);
		queue.insert('w', 2);
		queue.insert('z', 3);
		assert_eq!(queue.next(), Some(('w', 2)));
		assert_eq!(queue.next(), Some(('z', 3)));
	}
}
