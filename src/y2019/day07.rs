// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;
use crate::intcode::{self, threaded, Vm};


/// Chains one amplifier per phase setting, each feeding its output signal into
/// the next, and returns the last amplifier's output.
fn amplify(vm: &Vm, phase_settings: &[i64]) -> anyhow::Result<i64> {
	phase_settings.iter().try_fold(0, |signal, &phase_setting| {
		vm.clone().execute([phase_setting, signal]).next()
			.ok_or_else(|| anyhow::anyhow!("amplifier halted without output"))?
			.map_err(Into::into)
	})
}

/// Tries every permutation of `phase_settings`, returning the highest output.
fn highest_output(
	vm: &Vm,
	phase_settings: RangeInclusive<i64>,
	output: fn(&Vm, &[i64]) -> anyhow::Result<i64>,
) -> anyhow::Result<i64> {
	use itertools::Itertools as _;

	let len = phase_settings.clone().count();
	let outputs = phase_settings.permutations(len)
		.map(|phase_settings| output(vm, &phase_settings).map(|signal| (signal, phase_settings)));
	let (signal, phase_settings) = itertools::process_results(outputs, |outputs| outputs.max_by_key(|&(signal, _)| signal))?
		.ok_or_else(|| anyhow::anyhow!("no phase settings to try"))?;
	log::debug!("highest output {signal} for phase settings {phase_settings:?}");
	Ok(signal)
}

pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	highest_output(&Vm::new(intcode::parse::<i64>(input)?), 0..=4, amplify)
}


fn amp_name(i: usize) -> char {
	char::from(b'A' + (i % 26) as u8)
}

/// Runs one amplifier per phase setting on its own thread, in a ring, and relays
/// signals until an amplifier halts. Returns the last signal sent to the thrusters.
fn feedback_loop(vm: &Vm, phase_settings: &[i64]) -> anyhow::Result<i64> {
	let amps = phase_settings.iter().enumerate()
		.map(|(i, &phase_setting)| {
			let amp = threaded::spawn(amp_name(i), vm.clone());
			amp.input.send(phase_setting).map(|_| amp)
		})
		.collect::<Result<Vec<_>, _>>()?;
	let Some(first) = amps.first() else { anyhow::bail!("no amplifiers") };
	first.input.send(0)?;

	let mut thruster_signal = None;
	'relay: loop {
		for (i, amp) in amps.iter().enumerate() {
			let Ok(signal) = amp.output.recv() else {
				log::debug!("amp {} halted", amp_name(i));
				break 'relay
			};
			let signal = signal?;
			let next = (i + 1) % amps.len();
			log::trace!("amp {} -> amp {}: {signal}", amp_name(i), amp_name(next));
			if amps[next].input.send(signal).is_err() {
				log::debug!("amp {} already halted, dropping {signal}", amp_name(next));
			}
			if next == 0 { thruster_signal = Some(signal) }
		}
	}

	for amp in amps { amp.shutdown() }
	log::debug!("phase settings {phase_settings:?}: {thruster_signal:?}");
	thruster_signal.ok_or_else(|| anyhow::anyhow!("no signal reached the thrusters"))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	highest_output(&Vm::new(intcode::parse::<i64>(input)?), 5..=9, feedback_loop)
}


#[test]
fn tests() {
	const INPUTS: ([&str; 3], [&str; 2]) = (
		[
			"3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0",
			"3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0",
			"3,31,3,32,1002,32,10,32,1001,31,-2,31,1007,31,0,33,1002,33,7,33,1,33,31,31,1,32,31,31,4,31,99,0,0,0",
		],
		[
			"3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
			"3,52,1001,52,-5,52,3,53,1,52,56,54,1007,54,5,55,1005,55,26,1001,54,-5,54,1105,1,12,1,53,54,53,1008,54,0,55,1001,55,1,55,2,53,55,53,4,53,1001,56,-1,56,1005,56,6,99,0,0,0,0,10",
		]
	);
	let vm = |s| Vm::new(intcode::parse::<i64>(s).unwrap());
	assert_eq!(amplify(&vm(INPUTS.0[0]), &[4, 3, 2, 1, 0]).unwrap(), 43210);
	assert_eq!(part1(INPUTS.0[0]).unwrap(), 43210);
	assert_eq!(part1(INPUTS.0[1]).unwrap(), 54321);
	assert_eq!(part1(INPUTS.0[2]).unwrap(), 65210);
	assert_eq!(feedback_loop(&vm(INPUTS.1[0]), &[9, 8, 7, 6, 5]).unwrap(), 139629729);
	assert_eq!(feedback_loop(&vm(INPUTS.1[1]), &[9, 7, 8, 5, 6]).unwrap(), 18216);
	assert!(feedback_loop(&vm("3,0,99"), &[5, 6]).is_err());
}
