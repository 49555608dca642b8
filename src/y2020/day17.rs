// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::{HashMap, HashSet}, hash::Hash};
use crate::pos::{self, P2, P3, P4};


const CYCLES: usize = 6;

fn parse(input: &str) -> anyhow::Result<Vec<P2>> {
	let lines = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>();
	let width = lines.first().map_or(0, |l| l.len());
	if let Some(y) = lines.iter().position(|l| l.len() != width) {
		anyhow::bail!("line {} is not {width} wide", y + 1)
	}
	pos::walk_p2(lines.len() as i64, width as i64)
		.zip(lines.iter().flat_map(|l| l.chars()))
		.filter_map(|(p, c)| match c {
			'#' => Some(Ok(p)),
			'.' => None,
			c => Some(Err(anyhow::anyhow!("invalid cube {c:?} at {p}"))),
		})
		.collect()
}

fn cycle<P: Copy + Eq + Hash>(active: &HashSet<P>, all_neighbors: impl Fn(&P) -> Vec<P>) -> HashSet<P> {
	let mut counts = HashMap::<P, usize>::new();
	for neighbor in active.iter().flat_map(all_neighbors) {
		*counts.entry(neighbor).or_default() += 1;
	}
	counts.into_iter()
		.filter(|(p, count)| *count == 3 || (*count == 2 && active.contains(p)))
		.map(|(p, _)| p)
		.collect()
}

fn part1and2_impl<P: Copy + Eq + Hash>(
	active: impl IntoIterator<Item = P>,
	all_neighbors: impl Fn(&P) -> Vec<P> + Copy,
) -> usize {
	let mut active = active.into_iter().collect::<HashSet<_>>();
	for i in 0..CYCLES {
		active = cycle(&active, all_neighbors);
		log::debug!("after cycle {}: {} active", i + 1, active.len());
	}
	active.len()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1and2_impl(parse(input)?.into_iter().map(|P2 { x, y }| P3::new(x, y, 0)),
		|p: &P3| p.all_neighbors(true)))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part1and2_impl(parse(input)?.into_iter().map(|P2 { x, y }| P4::new(x, y, 0, 0)),
		|p: &P4| p.all_neighbors()))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		.#.
		..#
		###
	" };
	assert_eq!(parse(INPUT).unwrap(), [P2::new(1, 0), P2::new(2, 1), P2::new(0, 2), P2::new(1, 2), P2::new(2, 2)]);
	assert_eq!(part1(INPUT).unwrap(), 112);
	assert_eq!(part2(INPUT).unwrap(), 848);
	assert!(parse(".#\n#").is_err());
	assert!(parse(".?").is_err());
}
