// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::assembunny::{self, Cpu, Reg};


/// Runs the safe-cracking program with `eggs` in register `a`, returning the
/// value it leaves there.
fn part1and2_impl(input: &str, eggs: i64) -> anyhow::Result<i64> {
	let mut cpu = Cpu::new(assembunny::parse(input)?);
	cpu.set_reg(Reg::A, eggs);
	cpu.run()?;
	if log::log_enabled!(log::Level::Trace) {
		for (i, instr) in cpu.program().iter().enumerate() {
			log::trace!("toggled program {i}: {instr}");
		}
	}
	Ok(cpu.reg(Reg::A))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	part1and2_impl(input, 7)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	part1and2_impl(input, 12)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		cpy 2 a
		tgl a
		tgl a
		tgl a
		cpy 1 a
		dec a
		dec a
	" };
	assert_eq!(part1(INPUT).unwrap(), 3);
	assert_eq!(part2(INPUT).unwrap(), 3);

	// Computes a! by repeated multiplication
	const FACTORIAL: &str = indoc::indoc! { "
		cpy a b
		dec b
		cpy a d
		cpy 0 a
		cpy b c
		inc a
		dec c
		jnz c -2
		dec d
		jnz d -5
		dec b
		cpy b c
		jnz c -10
	" };
	assert_eq!(part1(FACTORIAL).unwrap(), 5040);
	assert_eq!(part2(FACTORIAL).unwrap(), 479001600);
}
