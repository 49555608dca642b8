// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::intcode::{self, Vm};


const TARGET_OUTPUT: i64 = 19690720;

fn part1and2_impl(program: &[i64], noun: i64, verb: i64) -> Result<i64, intcode::Error> {
	let mut vm = Vm::new(program.to_vec());
	vm.poke(1, noun)?;
	vm.poke(2, verb)?;
	vm.run([])?;
	vm.peek(0)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	Ok(part1and2_impl(&intcode::parse::<i64>(input)?, 12, 2)?)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let program = intcode::parse::<i64>(input)?;
	itertools::iproduct!(0..=99, 0..=99)
		.find(|&(noun, verb)| match part1and2_impl(&program, noun, verb) {
			Ok(output) => output == TARGET_OUTPUT,
			Err(e) => {
				log::trace!("noun {noun}, verb {verb}: {e}");
				false
			}
		})
		.map(|(noun, verb)| noun * 100 + verb)
		.ok_or_else(|| anyhow::anyhow!("no noun and verb produce {TARGET_OUTPUT}"))
}


#[test]
fn tests() {
	fn part1_state(s: &str) -> Vec<i64> {
		let mut vm = Vm::new(intcode::parse::<i64>(s).unwrap());
		vm.run([]).unwrap();
		vm.memory().to_vec()
	}
	assert_eq!(part1_state("1,0,0,0,99"), [2, 0, 0, 0, 99]);
	assert_eq!(part1_state("2,3,0,3,99"), [2, 3, 0, 6, 99]);
	assert_eq!(part1_state("2,4,4,5,99,0"), [2, 4, 4, 5, 99, 9801]);
	assert_eq!(part1_state("1,1,1,4,99,5,6,0,99"), [30, 1, 1, 4, 2, 5, 6, 0, 99]);
	assert!(part1("1,0,0,0,99").is_err());
	assert_eq!(part2("1,0,0,0,99,19690700,20").unwrap(), 506);
	assert!(part2("1,0,0,0,99").is_err());
}
