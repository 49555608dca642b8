// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::assembunny::{self, Cpu, Reg};


const MAX_A: i64 = 1 << 20;
const STEP_BUDGET: u64 = 1_000_000;

/// Whether `cpu` sends 0, 1, 0, 1, … forever. That is proven once it reaches the
/// same state at an `out` twice, with the pattern intact in between. Since `tgl`
/// rewrites the program, the state includes the program as well.
fn is_clock_signal(mut cpu: Cpu) -> bool {
	let mut seen = HashSet::new();
	let mut expected = 0;
	loop {
		match cpu.next_output(Some(STEP_BUDGET)) {
			Ok(Some(output)) if output == expected => {
				if !seen.insert((cpu.state(), cpu.program().to_vec(), expected)) { return true }
				expected ^= 1;
			}
			Ok(_) => return false,
			Err(e) => {
				log::debug!("giving up: {e}");
				return false
			}
		}
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let cpu = Cpu::new(assembunny::parse(input)?);
	(1..MAX_A)
		.find(|&a| {
			let mut cpu = cpu.clone();
			cpu.set_reg(Reg::A, a);
			is_clock_signal(cpu)
		})
		.ok_or_else(|| anyhow::anyhow!("no clock signal for a below {MAX_A}"))
}


#[test]
fn tests() {
	// Sends the bits of a + 2, least significant first, over and over
	const INPUT: &str = indoc::indoc! { "
		cpy a d
		cpy 1 c
		cpy 2 b
		inc d
		dec b
		jnz b -2
		dec c
		jnz c -5
		cpy d a
		jnz 0 0
		cpy a b
		cpy 0 a
		cpy 2 c
		jnz b 2
		jnz 1 6
		dec b
		dec c
		jnz c -4
		inc a
		jnz 1 -7
		cpy 2 b
		jnz c 2
		jnz 1 4
		dec b
		dec c
		jnz 1 -4
		jnz 0 0
		out b
		jnz a -19
		jnz 1 -21
	" };
	assert_eq!(part1(INPUT).unwrap(), 8);
	assert!(!is_clock_signal(Cpu::new(assembunny::parse("out 0\nout 1").unwrap())));
	assert!(is_clock_signal(Cpu::new(assembunny::parse("out 0\nout 1\njnz 1 -2").unwrap())));

	// Toggles its jump back into an invalid `cpy` and halts after 0, 1, 0, 1
	let toggling = assembunny::parse("out 0\nout 1\ntgl 1\ncpy 1 -3").unwrap();
	assert!(!is_clock_signal(Cpu::new(toggling.clone())));
	let mut cpu = Cpu::new(toggling);
	let outputs = std::iter::from_fn(|| cpu.next_output(None).unwrap()).collect::<Vec<_>>();
	assert_eq!(outputs, [0, 1, 0, 1]);
}
