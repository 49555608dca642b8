// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::intcode::{self, Vm};


/// Runs the diagnostic for system `id`, returning all of its outputs.
fn diagnose(input: &str, id: i64) -> anyhow::Result<Vec<i64>> {
	Ok(Vm::new(intcode::parse::<i64>(input)?).run([id])?)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let outputs = diagnose(input, 1)?;
	let Some((&code, tests)) = outputs.split_last() else { anyhow::bail!("no diagnostic code") };
	if let Some((i, failed)) = tests.iter().enumerate().find(|&(_, &t)| t != 0) {
		anyhow::bail!("test {} failed with {failed}", i + 1)
	}
	Ok(code)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	use itertools::Itertools as _;
	diagnose(input, 5)?.into_iter()
		.exactly_one()
		.map_err(|outputs| anyhow::anyhow!("expected one diagnostic code, got {}", outputs.count()))
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 8] = [
		"1002,4,3,4,33",
		"3,9,8,9,10,9,4,9,99,-1,8",
		"3,9,7,9,10,9,4,9,99,-1,8",
		"3,3,1108,-1,8,3,4,3,99",
		"3,3,1107,-1,8,3,4,3,99",
		"3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9",
		"3,3,1105,-1,9,1101,0,0,12,4,12,99,1",
		indoc::indoc! { "
			3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,
			1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,
			999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99
		" },
	];

	fn run(s: &str, input: i64) -> Vec<i64> {
		Vm::new(intcode::parse::<i64>(s).unwrap()).run([input]).unwrap()
	}

	#[test]
	fn tests() {
		let mut tiny_program = Vm::new(intcode::parse::<i64>(INPUTS[0]).unwrap());
		assert_eq!(tiny_program.execute([]).count(), 0);
		assert_eq!(tiny_program.memory(), [1002, 4, 3, 4, 99]);
		assert_eq!(run(INPUTS[1], 8), [1]);
		assert_eq!(run(INPUTS[1], 13), [0]);
		assert_eq!(run(INPUTS[2], 7), [1]);
		assert_eq!(run(INPUTS[2], 8), [0]);
		assert_eq!(run(INPUTS[3], 8), [1]);
		assert_eq!(run(INPUTS[3], 13), [0]);
		assert_eq!(run(INPUTS[4], 7), [1]);
		assert_eq!(run(INPUTS[4], 8), [0]);
		assert_eq!(run(INPUTS[5], 0), [0]);
		assert_eq!(run(INPUTS[5], 1337), [1]);
		assert_eq!(run(INPUTS[6], 0), [0]);
		assert_eq!(run(INPUTS[6], 1337), [1]);
		assert_eq!(run(INPUTS[7], 7), [999]);
		assert_eq!(run(INPUTS[7], 8), [1000]);
		assert_eq!(run(INPUTS[7], 13), [1001]);
		assert_eq!(part2(INPUTS[7]).unwrap(), 999);

		assert_eq!(part1("104,0,104,0,104,42,99").unwrap(), 42);
		assert!(part1("104,0,104,3,104,42,99").is_err());
		assert!(part1("99").is_err());
		assert!(part2("104,1,104,2,99").is_err());
	}
}
