// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;
use crate::pos::{Dir, P2};


#[derive(Debug, Clone, Copy)]
enum Turn { Left, Right }

fn parse(input: &str) -> anyhow::Result<Vec<(Turn, i64)>> {
	input.split(',')
		.map(str::trim)
		.filter(|step| !step.is_empty())
		.map(|step| {
			let (turn, blocks) = if let Some(blocks) = step.strip_prefix('L') {
				(Turn::Left, blocks)
			} else if let Some(blocks) = step.strip_prefix('R') {
				(Turn::Right, blocks)
			} else {
				anyhow::bail!("invalid turn in {step:?}")
			};
			let blocks = blocks.parse::<u32>().with_context(|| format!("invalid distance in {step:?}"))?;
			Ok((turn, i64::from(blocks)))
		})
		.collect()
}

fn turn(dir: Dir, turn: Turn) -> Dir {
	match turn {
		Turn::Left => dir.left(),
		Turn::Right => dir.right(),
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let (_, end) = parse(input)?.into_iter()
		.fold((Dir::North, P2::default()), |(dir, pos), (t, blocks)| {
			let dir = turn(dir, t);
			(dir, dir.steps_from(pos, blocks))
		});
	Ok(end.manhattan_distance(&P2::default()))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let mut visited = std::collections::HashSet::from([P2::default()]);
	let (mut dir, mut pos) = (Dir::North, P2::default());
	for (t, blocks) in parse(input)? {
		dir = turn(dir, t);
		for _ in 0..blocks {
			pos = dir.from(pos);
			if !visited.insert(pos) {
				log::debug!("visited {pos} twice");
				return Ok(pos.manhattan_distance(&P2::default()))
			}
		}
	}
	anyhow::bail!("no location visited twice")
}


#[test]
fn tests() {
	assert_eq!(part1("R2, L3").unwrap(), 5);
	assert_eq!(part1("R2, R2, R2").unwrap(), 2);
	assert_eq!(part1("R5, L5, R5, R3\n").unwrap(), 12);
	assert_eq!(part2("R8, R4, R4, R8").unwrap(), 4);
	assert!(part2("R2, L3").is_err());
	assert!(part1("R2, X3").is_err());
	assert!(part1("R2, L").is_err());
}
