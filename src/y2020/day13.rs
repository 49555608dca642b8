// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::str::FromStr;
use crate::{filereader, intmath};


/// A bus ID, or `x` for a bus that is out of service.
struct Bus(Option<u64>);

impl FromStr for Bus {
	type Err = std::num::ParseIntError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "x" { Ok(Bus(None)) } else { s.parse().map(Some).map(Bus) }
	}
}

fn parse(input: &str) -> anyhow::Result<(u64, Vec<Bus>)> {
	let mut lines = input.lines();
	let (Some(earliest), Some(buses)) = (lines.next(), lines.next()) else {
		anyhow::bail!("expected two lines")
	};
	Ok((earliest.trim().parse()?, filereader::parse_numbers_from_line(buses)?))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let (earliest, buses) = parse(input)?;
	let (id, departure) = buses.iter()
		.filter_map(|bus| bus.0)
		.filter(|&id| id > 0)
		.map(|id| (id, intmath::next_multiple(earliest, id)))
		.min_by_key(|&(_, departure)| departure)
		.ok_or_else(|| anyhow::anyhow!("no buses in service"))?;
	log::debug!("taking bus {id} at {departure}");
	Ok(id * (departure - earliest))
}


/// Bus `id` at offset `i` departs at `t + i`, so `t ≡ -i (mod id)`.
fn part2_impl(buses: &[Bus]) -> anyhow::Result<u64> {
	let congruences = buses.iter()
		.enumerate()
		.filter_map(|(i, bus)| bus.0.map(|id| (i as u64, id)))
		.map(|(i, id)| i.checked_rem(id).map(|r| ((id - r) % id, id)))
		.collect::<Option<Vec<_>>>()
		.ok_or_else(|| anyhow::anyhow!("invalid bus ID 0"))?;
	let (t, period) = intmath::chinese_remainder(&congruences)
		.ok_or_else(|| anyhow::anyhow!("buses never align"))?;
	log::debug!("buses align every {period} minutes");
	Ok(t)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part2_impl(&parse(input)?.1)
}


#[test]
fn tests() {
	const INPUT: &str = "939\n7,13,x,x,59,x,31,19\n";
	assert_eq!(part1(INPUT).unwrap(), 295);
	assert_eq!(part2(INPUT).unwrap(), 1068781);
	let part2_line = |line| part2_impl(&filereader::parse_numbers_from_line::<Bus>(line).unwrap()).unwrap();
	assert_eq!(part2_line("17,x,13,19"), 3417);
	assert_eq!(part2_line("67,7,59,61"), 754018);
	assert_eq!(part2_line("67,x,7,59,61"), 779210);
	assert_eq!(part2_line("67,7,x,59,61"), 1261476);
	assert_eq!(part2_line("1789,37,47,1889"), 1202161486);
	assert!(part2_impl(&filereader::parse_numbers_from_line::<Bus>("4,x,6").unwrap()).is_err());
	assert!(part1("939\n7,y").is_err());
	assert!(part1("939").is_err());
	assert!(part2("939\n0,x").is_err());
}
