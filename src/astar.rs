// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! A* search, after the pseudocode on
//! <https://en.wikipedia.org/wiki/A*_search_algorithm>.
//!
//! Puzzles describe their graph through a [`Client`]; nodes only need to be
//! hashable, so the search can key its bookkeeping on them directly.

use std::{collections::HashMap, fmt::Debug, hash::Hash};
use crate::collections::{Order, PriorityQueue};


pub(crate) trait Client {
	type Node: Clone + Eq + Hash + Debug;

	fn all_neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

	/// Must never overestimate the actual distance.
	fn estimate_distance(&self, from: &Self::Node, goal: &Self::Node) -> u64;

	/// Distance between two direct neighbors (i.e. a pair derived using `all_neighbors`).
	fn neighbor_distance(&self, n1: &Self::Node, n2: &Self::Node) -> u64;

	fn goal_reached(&self, cand: &Self::Node, goal: &Self::Node) -> bool {
		cand == goal
	}
}


pub(crate) struct AStar<'c, C: Client> {
	client: &'c C,
	start: C::Node,
	goal: C::Node,
	max_rounds: Option<usize>,
}

/// Outcome of a search: the path found (if any), and every node that was scored.
#[derive(Debug)]
pub(crate) struct Search<N> {
	found: Option<(Vec<N>, u64)>,
	g_score: HashMap<N, u64>,
}

impl<N> Search<N> {
	/// Path from start to goal, both inclusive.
	pub(crate) fn path(&self) -> Option<&[N]> {
		self.found.as_ref().map(|(path, _)| path.as_slice())
	}

	pub(crate) fn cost(&self) -> Option<u64> {
		self.found.as_ref().map(|&(_, cost)| cost)
	}

	pub(crate) fn explored(&self) -> impl Iterator<Item = (&N, u64)> + '_ {
		self.g_score.iter().map(|(node, &score)| (node, score))
	}
}

impl<'c, C: Client> AStar<'c, C> {
	pub(crate) fn new(start: C::Node, goal: C::Node, client: &'c C) -> Self {
		Self { client, start, goal, max_rounds: None }
	}

	/// Gives up (finding no path) after expanding `max_rounds` nodes.
	pub(crate) fn max_rounds(self, max_rounds: usize) -> Self {
		Self { max_rounds: Some(max_rounds), ..self }
	}

	pub(crate) fn solve(self) -> Search<C::Node> {
		let Self { client, start, goal, max_rounds } = self;
		log::debug!("astar start {start:?} goal {goal:?}");

		let mut open_set = PriorityQueue::new(Order::LowestFirst);
		let mut came_from = HashMap::<C::Node, C::Node>::new();
		let mut g_score = HashMap::new();

		g_score.insert(start.clone(), 0_u64);
		open_set.insert(start.clone(), estimate_priority(client.estimate_distance(&start, &goal)));

		let mut round = 0;
		while !open_set.is_empty() && max_rounds.map_or(true, |max| round < max) {
			let Some((current, _)) = open_set.next() else { break };
			log::trace!("round {round}: {current:?}, {} more open: {open_set:?}", open_set.len());
			round += 1;

			let current_g_score = g_score[&current];
			if client.goal_reached(&current, &goal) {
				let path = reconstruct_path(&came_from, current);
				log::debug!("astar reached goal after {round} rounds, cost {current_g_score}");
				return Search { found: Some((path, current_g_score)), g_score }
			}

			let neighbors = client.all_neighbors(&current);
			log::trace!("neighbors of {current:?}: {neighbors:?}");
			for neighbor in neighbors {
				let tentative = current_g_score + client.neighbor_distance(&current, &neighbor);
				if g_score.get(&neighbor).map_or(false, |&known| tentative >= known) {
					continue
				}

				// This path is the best until now
				let f_score = tentative + client.estimate_distance(&neighbor, &goal);
				came_from.insert(neighbor.clone(), current.clone());
				g_score.insert(neighbor.clone(), tentative);
				open_set.insert(neighbor, estimate_priority(f_score));
			}
		}

		log::debug!("astar found no path after {round} rounds");
		Search { found: None, g_score }
	}
}

fn estimate_priority(score: u64) -> i64 {
	i64::try_from(score).unwrap_or(i64::MAX)
}

fn reconstruct_path<N: Clone + Eq + Hash>(came_from: &HashMap<N, N>, mut current: N) -> Vec<N> {
	let mut path = vec![current.clone()];
	while let Some(prev) = came_from.get(&current) {
		path.push(prev.clone());
		current = prev.clone();
	}
	path.reverse();
	path
}


#[cfg(test)]
mod tests {
	use super::*;

	struct Graph(HashMap<&'static str, Vec<(&'static str, u64)>>);

	impl Client for Graph {
		type Node = &'static str;

		fn all_neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
			self.0.get(node).into_iter().flatten().map(|&(n, _)| n).collect()
		}

		fn estimate_distance(&self, from: &Self::Node, goal: &Self::Node) -> u64 {
			u64::from(from != goal)
		}

		fn neighbor_distance(&self, n1: &Self::Node, n2: &Self::Node) -> u64 {
			self.0[n1].iter().find(|&&(n, _)| n == *n2).map(|&(_, d)| d).unwrap()
		}
	}

	fn graph() -> Graph {
		Graph(HashMap::from([
			("start", vec![("a", 15), ("d", 20)]),
			("a", vec![("start", 15), ("b", 20)]),
			("b", vec![("a", 20), ("c", 30)]),
			("c", vec![("b", 30), ("end", 40)]),
			("d", vec![("start", 20), ("d1", 2), ("e", 20)]),
			("d1", vec![("d", 2), ("d2", 1)]),
			("d2", vec![("d1", 1), ("d3", 1)]),
			("d3", vec![("d2", 1), ("e", 1)]),
			("e", vec![("d", 20), ("d3", 1), ("end", 20)]),
			("end", vec![("c", 40), ("e", 20)]),
			("island", vec![]),
		]))
	}

	#[test]
	fn shortest_path() {
		let graph = graph();
		let search = AStar::new("start", "end", &graph).solve();
		assert_eq!(search.path(), Some(&["start", "d", "d1", "d2", "d3", "e", "end"][..]));
		assert_eq!(search.cost(), Some(45));
		assert!(search.explored().any(|(&n, g)| n == "a" && g == 15));
	}

	#[test]
	fn trivial_and_unreachable() {
		let graph = graph();
		let search = AStar::new("c", "c", &graph).solve();
		assert_eq!(search.path(), Some(&["c"][..]));
		assert_eq!(search.cost(), Some(0));

		let search = AStar::new("start", "island", &graph).solve();
		assert_eq!(search.path(), None);
		assert_eq!(search.cost(), None);
		assert_eq!(search.explored().count(), 10);
	}

	#[test]
	fn max_rounds() {
		let graph = graph();
		assert_eq!(AStar::new("start", "end", &graph).max_rounds(3).solve().path(), None);
		assert_eq!(AStar::new("start", "end", &graph).max_rounds(100).solve().cost(), Some(45));
	}

	#[test]
	fn custom_goal() {
		struct Line;
		impl Client for Line {
			type Node = i64;
			fn all_neighbors(&self, node: &i64) -> Vec<i64> { vec![node - 1, node + 1] }
			fn estimate_distance(&self, from: &i64, goal: &i64) -> u64 { u64::try_from(goal / 10 * 10 - from).unwrap_or(0) }
			fn neighbor_distance(&self, _: &i64, _: &i64) -> u64 { 1 }
			fn goal_reached(&self, cand: &i64, goal: &i64) -> bool { cand / 10 == goal / 10 }
		}
		let search = AStar::new(3, 47, &Line).solve();
		assert_eq!(search.cost(), Some(37));
		assert_eq!(search.path().and_then(|p| p.last()), Some(&40));
	}
}
