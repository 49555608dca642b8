// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::filereader;


fn mass_fuel(mass: u64) -> u64 {
	(mass / 3).saturating_sub(2)
}

fn module_total_fuel(module_mass: u64) -> u64 {
	let mut total = 0;
	let mut fuel = mass_fuel(module_mass);
	loop {
		total += fuel;
		if fuel <= 6 { break }
		fuel = mass_fuel(fuel);
	}
	total
}

fn sum_fuel(input: &str, fuel_per_module: fn(u64) -> u64) -> anyhow::Result<u64> {
	filereader::numbers(input)?
		.into_iter()
		.map(|mass| u64::try_from(mass)
			.map(fuel_per_module)
			.map_err(|_| anyhow::anyhow!("negative module mass {mass}")))
		.sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	sum_fuel(input, mass_fuel)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	sum_fuel(input, module_total_fuel)
}


#[test]
fn tests() {
	const INPUT: &str = "12\n14\n1969\n100756\n";
	assert_eq!(part1(INPUT).unwrap(), 2 + 2 + 654 + 33583);
	assert_eq!(mass_fuel(6), 0);
	assert_eq!(module_total_fuel(14), 2);
	assert_eq!(module_total_fuel(1969), 966);
	assert_eq!(module_total_fuel(100756), 50346);
	assert_eq!(part2(INPUT).unwrap(), 2 + 2 + 966 + 50346);
	assert!(part1("12\n-3\n").is_err());
}
