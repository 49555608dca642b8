// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::filereader;


type Passport<'a> = HashMap<&'a str, &'a str>;

fn parse(input: &str) -> anyhow::Result<Vec<Passport<'_>>> {
	filereader::blank_separated_groups(input).into_iter()
		.map(|lines| lines.into_iter()
			.flat_map(str::split_whitespace)
			.map(|field| field.split_once(':')
				.ok_or_else(|| anyhow::anyhow!("invalid field {field:?}")))
			.collect::<anyhow::Result<Passport<'_>>>())
		.collect()
}

fn valid_number(s: &str, digits: Option<usize>, range: std::ops::RangeInclusive<u32>) -> bool {
	digits.map_or(true, |digits| s.len() == digits)
		&& s.parse().map_or(false, |num| range.contains(&num))
}

fn valid_height(s: &str) -> bool {
	if let Some(cm) = s.strip_suffix("cm") {
		valid_number(cm, None, 150..=193)
	} else if let Some(inches) = s.strip_suffix("in") {
		valid_number(inches, None, 59..=76)
	} else {
		false
	}
}

fn valid_hair_color(s: &str) -> bool {
	s.strip_prefix('#').map_or(false, |hex| hex.len() == 6
		&& hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')))
}

const REQUIRED_FIELDS: [(&str, fn(&str) -> bool); 7] = [
	("byr", |s| valid_number(s, Some(4), 1920..=2002)),
	("iyr", |s| valid_number(s, Some(4), 2010..=2020)),
	("eyr", |s| valid_number(s, Some(4), 2020..=2030)),
	("hgt", valid_height),
	("hcl", valid_hair_color),
	("ecl", |s| matches!(s, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth")),
	("pid", |s| s.len() == 9 && s.bytes().all(|b| b.is_ascii_digit())),
];

fn count_valid(input: &str, validate: bool) -> anyhow::Result<usize> {
	Ok(parse(input)?.iter()
		.filter(|passport| REQUIRED_FIELDS.iter().all(|(name, is_valid)| passport.get(name)
			.map_or(false, |value| !validate || is_valid(value))))
		.inspect(|passport| log::debug!("valid: {passport:?}"))
		.count())
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	count_valid(input, false)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	count_valid(input, true)
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
			byr:1937 iyr:2017 cid:147 hgt:183cm

			iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
			hcl:#cfa07d byr:1929

			hcl:#ae17e1 iyr:2013
			eyr:2024
			ecl:brn pid:760753108 byr:1931
			hgt:179cm

			hcl:#cfa07d eyr:2025 pid:166559648
			iyr:2011 ecl:brn hgt:59in
		" },
		indoc::indoc! { "
			eyr:1972 cid:100
			hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

			iyr:2019
			hcl:#602927 eyr:1967 hgt:170cm
			ecl:grn pid:012533040 byr:1946

			hcl:dab227 iyr:2012
			ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

			hgt:59cm ecl:zzz
			eyr:2038 hcl:74454a iyr:2023
			pid:3556412378 byr:2007
		" },
		indoc::indoc! { "
			pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
			hcl:#623a2f

			eyr:2029 ecl:blu cid:129 byr:1989
			iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

			hcl:#888785
			hgt:164cm byr:2001 iyr:2015 cid:88
			pid:545766238 ecl:hzl
			eyr:2022

			iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 2);
	assert_eq!(part2(INPUTS[1]).unwrap(), 0);
	assert_eq!(part2(INPUTS[2]).unwrap(), 4);
	assert!(valid_height("60in"));
	assert!(!valid_height("190in"));
	assert!(!valid_hair_color("#123abz"));
	assert!(part1("byr:1937 iyr").is_err());
}
