// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_bigint::BigInt;
use crate::intcode::{self, Vm, Word as _};


fn part1and2_impl(input: &str, mode: i64) -> anyhow::Result<BigInt> {
	let mut vm = Vm::<BigInt>::new(intcode::parse(input)?).with_ext_memory();
	let outputs = vm.run([BigInt::from_i64(mode)])?;
	match <[_; 1]>::try_from(outputs) {
		Ok([keycode]) => Ok(keycode),
		Err(outputs) => anyhow::bail!("BOOST reported malfunctions: {outputs:?}"),
	}
}

pub(crate) fn part1(input: &str) -> anyhow::Result<BigInt> {
	part1and2_impl(input, 1)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<BigInt> {
	part1and2_impl(input, 2)
}


#[test]
fn tests() {
	use {std::str::FromStr as _, itertools::Itertools as _};
	const INPUTS: [&str; 3] = [
		"109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99",
		"1102,34915192,34915192,7,4,7,99,0",
		"104,1125899906842624,99",
	];
	let run = |s| Vm::<BigInt>::new(intcode::parse(s).unwrap()).with_ext_memory().run([]).unwrap();
	assert_eq!(Vm::<i64>::new(intcode::parse(INPUTS[0]).unwrap()).with_ext_memory().run([]).unwrap()
		.iter().join(","), INPUTS[0]);
	assert_eq!(run(INPUTS[1]), [BigInt::from_str("1219070632396864").unwrap()]);
	assert_eq!(run(INPUTS[2]), [BigInt::from_str("1125899906842624").unwrap()]);
	assert_eq!(run("1102,9223372036854775807,4,7,4,7,99,0"), [BigInt::from_str("36893488147419103228").unwrap()]);
	assert_eq!(part1("3,0,4,0,99").unwrap(), BigInt::from(1));
	assert_eq!(part2("3,0,4,0,99").unwrap(), BigInt::from(2));
	assert!(part1("104,203,4,0,99").is_err());
}
