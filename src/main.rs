// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod assembunny;
mod astar;
mod collections;
mod filereader;
mod intcode;
mod intmath;
mod logger;
mod pos;

mod y2016;
mod y2019;
mod y2020;

use std::path::PathBuf;
use clap::Parser;


/// Advent of Code solutions
#[derive(Debug, Parser)]
struct Args {
	/// The puzzle's year
	year: u16,

	/// The puzzle's day
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// The part to solve, both if omitted
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	part: Option<u8>,

	/// Puzzle input file; read from stdin if omitted
	#[arg(short, long, value_name = "PATH")]
	input: Option<PathBuf>,

	/// Log what the solutions and their helpers are up to
	#[arg(short, long)]
	verbose: bool,
}


macro_rules! puzzles {
	( $( $year:literal => { $( $day:literal => [ $( $part:literal ),+ ] ),* $(,)? } ),* $(,)? ) => { paste::paste! {
		/// Parts solved for a given day, if any.
		fn parts(year: u16, day: u8) -> Option<&'static [u8]> {
			match (year, day) {
				$( $( ($year, $day) => Some(&[ $( $part ),+ ]), )* )*
				_ => None,
			}
		}

		fn solve(year: u16, day: u8, part: u8, input: &str) -> anyhow::Result<String> {
			match (year, day, part) {
				$( $( $(
					($year, $day, $part) => [<y $year>]::[<day $day>]::[<part $part>](input)
						.map(|answer| answer.to_string()),
				)+ )* )*
				_ => anyhow::bail!("no solution for {year} day {day} part {part}"),
			}
		}
	} };
}

puzzles! {
	2016 => {
		01 => [1, 2],
		12 => [1, 2],
		13 => [1, 2],
		23 => [1, 2],
		25 => [1],
	},
	2019 => {
		01 => [1, 2],
		02 => [1, 2],
		05 => [1, 2],
		07 => [1, 2],
		09 => [1, 2],
	},
	2020 => {
		04 => [1, 2],
		13 => [1, 2],
		17 => [1, 2],
	},
}


fn main() -> anyhow::Result<()> {
	use anyhow::Context as _;

	let args = Args::parse();
	logger::init(args.verbose)?;
	log::debug!("{args:?}");

	let available = parts(args.year, args.day)
		.with_context(|| format!("no solutions for {} day {}", args.year, args.day))?;
	let input = filereader::read_input(args.input.as_deref())
		.context("failed to read puzzle input")?;

	for &part in available.iter().filter(|&&p| args.part.map_or(true, |part| part == p)) {
		let answer = solve(args.year, args.day, part, &input)
			.with_context(|| format!("{} day {} part {part}", args.year, args.day))?;
		println!("{} day {} part {part}: {answer}", args.year, args.day);
	}
	if let Some(part) = args.part.filter(|p| !available.contains(p)) {
		anyhow::bail!("no solution for {} day {} part {part}", args.year, args.day)
	}

	Ok(())
}


#[test]
fn tests() {
	assert_eq!(parts(2016, 25), Some(&[1][..]));
	assert_eq!(parts(2019, 7), Some(&[1, 2][..]));
	assert_eq!(parts(2019, 3), None);
	assert_eq!(solve(2019, 1, 1, "12\n14\n").unwrap(), "4");
	assert_eq!(solve(2016, 1, 2, "R8, R4, R4, R8").unwrap(), "4");
	assert!(solve(2016, 25, 2, "").is_err());

	use clap::CommandFactory as _;
	Args::command().debug_assert();
	let args = Args::try_parse_from(["advent", "2020", "17", "--part", "2", "-v"]).unwrap();
	assert_eq!((args.year, args.day, args.part, args.verbose), (2020, 17, Some(2), true));
	assert!(Args::try_parse_from(["advent", "2020", "26"]).is_err());
}
