// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{astar::{AStar, Client}, pos::P2};


const START: P2 = P2::new(1, 1);
const MAX_ROUNDS: usize = 100_000;

struct Maze {
	magic: u32,
	/// Positions further from `START` than this are considered walls.
	max_distance: Option<u64>,
}

impl Maze {
	fn is_open(&self, p: &P2) -> bool {
		let &P2 { x, y } = p;
		if x < 0 || y < 0 { return false }
		if self.max_distance.map_or(false, |max| p.manhattan_distance(&START) > max) { return false }
		(x * x + 3 * x + 2 * x * y + y + y * y + i64::from(self.magic)).count_ones() % 2 == 0
	}
}

impl Client for Maze {
	type Node = P2;

	fn all_neighbors(&self, node: &P2) -> Vec<P2> {
		node.all_neighbors(false).into_iter().filter(|p| self.is_open(p)).collect()
	}

	fn estimate_distance(&self, from: &P2, goal: &P2) -> u64 {
		from.manhattan_distance(goal)
	}

	fn neighbor_distance(&self, _: &P2, _: &P2) -> u64 {
		1
	}
}

fn parse(input: &str) -> anyhow::Result<u32> {
	use anyhow::Context as _;
	input.trim().parse().with_context(|| format!("invalid favorite number {:?}", input.trim()))
}


fn part1_impl(magic: u32, goal: P2) -> anyhow::Result<u64> {
	let maze = Maze { magic, max_distance: None };
	let search = AStar::new(START, goal, &maze).max_rounds(MAX_ROUNDS).solve();
	log::debug!("explored {} locations", search.explored().count());
	if let Some(path) = search.path() {
		log::debug!("path: {}", path.iter().map(P2::to_string).collect::<Vec<_>>().join(" "));
	}
	search.cost().ok_or_else(|| anyhow::anyhow!("no path from {START} to {goal}"))
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part1_impl(parse(input)?, P2::new(31, 39))
}


/// Counts the locations reachable from `START` in at most `max_steps` steps. Any such
/// path stays within `max_steps` (Manhattan distance) of `START`, so the maze is
/// bounded to that area, which keeps searches for unreachable candidates finite.
fn part2_impl(magic: u32, max_steps: u64) -> usize {
	use itertools::iproduct;
	let maze = Maze { magic, max_distance: Some(max_steps) };
	let max_coord = START.x.max(START.y) + max_steps as i64;
	iproduct!(0..=max_coord, 0..=max_coord)
		.map(|(y, x)| P2::new(x, y))
		.filter(|p| maze.is_open(p))
		.filter(|&p| AStar::new(START, p, &maze).solve().cost()
			.map_or(false, |cost| cost <= max_steps))
		.count()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part2_impl(parse(input)?, 50))
}


#[test]
fn tests() {
	let maze = Maze { magic: 10, max_distance: None };
	let row = |y| (0..10).map(|x| if maze.is_open(&P2::new(x, y)) { '.' } else { '#' }).collect::<String>();
	assert_eq!(row(0), ".#.####.##");
	assert_eq!(row(1), "..#..#...#");
	assert_eq!(row(6), "#...##.###");
	assert_eq!(part1_impl(10, P2::new(7, 4)).unwrap(), 11);
	assert!(part1_impl(10, P2::new(1, 0)).is_err());
	assert_eq!(part2_impl(10, 0), 1);
	assert_eq!(part2_impl(10, 2), 5);
	assert!(parse("ten").is_err());
	assert!(parse("9223372036854775807").is_err());
	assert_eq!(parse("4294967295\n").unwrap(), u32::MAX);
	Maze { magic: u32::MAX, max_distance: None }.is_open(&P2::new(100_000, 100_000));
}
