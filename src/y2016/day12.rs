// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::assembunny::{self, Cpu, Reg};


fn part1and2_impl(input: &str, c: i64) -> anyhow::Result<i64> {
	let mut cpu = Cpu::new(assembunny::parse(input)?);
	cpu.set_reg(Reg::C, c);
	cpu.run()?;
	Ok(cpu.reg(Reg::A))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	part1and2_impl(input, 0)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	part1and2_impl(input, 1)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		cpy 41 a
		inc a
		inc a
		dec a
		jnz a 2
		dec a
	" };
	assert_eq!(part1(INPUT).unwrap(), 42);
	assert_eq!(part2(INPUT).unwrap(), 42);
	assert_eq!(part2("jnz c 2\ninc a\ninc a").unwrap(), 1);
	assert!(part1("cpy 41").is_err());
}
