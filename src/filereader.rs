// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{io::Read as _, path::Path, str::FromStr};


type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("read failed: {0}")]
	Io(#[from] std::io::Error),
	#[error("line {line}: failed to parse {text:?}")]
	Line { line: usize, text: String, source: BoxedError },
	#[error("item {item}: failed to parse {text:?}")]
	Item { item: usize, text: String, source: BoxedError },
}


/// Reads the whole puzzle input, from `path` if given or else from stdin.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, Error> {
	match path {
		Some(path) => Ok(std::fs::read_to_string(path)?),
		None => {
			let mut input = String::new();
			std::io::stdin().lock().read_to_string(&mut input)?;
			Ok(input)
		}
	}
}

/// Parses one number per line, skipping blank lines.
pub(crate) fn numbers(s: &str) -> Result<Vec<i64>, Error> {
	s.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(l, line)| line.trim().parse()
			.map_err(|e| Error::Line { line: l + 1, text: line.to_owned(), source: Box::new(e) }))
		.collect()
}

pub(crate) fn parse_numbers_from_line<T>(line: &str) -> Result<Vec<T>, Error>
where T: FromStr, T::Err: std::error::Error + Send + Sync + 'static {
	line.split(',')
		.enumerate()
		.map(|(i, item)| item.trim().parse()
			.map_err(|e| Error::Item { item: i + 1, text: item.to_owned(), source: Box::new(e) }))
		.collect()
}

pub(crate) fn blank_separated_groups(s: &str) -> Vec<Vec<&str>> {
	let mut groups = vec![];
	let mut group = vec![];
	for line in s.lines().map(str::trim_end).chain(std::iter::once("")) {
		if line.is_empty() {
			if !group.is_empty() { groups.push(std::mem::take(&mut group)) }
		} else {
			group.push(line)
		}
	}
	groups
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers_per_line() {
		assert_eq!(numbers("12\n-4\n 7 \n").unwrap(), [12, -4, 7]);
		assert!(matches!(numbers("1\nx\n"), Err(Error::Line { line: 2, .. })));
		assert_eq!(numbers("3\n\n5\n\n").unwrap(), [3, 5]);
		assert!(matches!(numbers("1\n\nx"), Err(Error::Line { line: 3, .. })));
	}

	#[test]
	fn numbers_in_line() {
		assert_eq!(parse_numbers_from_line::<i64>("1,-2, 3").unwrap(), [1, -2, 3]);
		let err = parse_numbers_from_line::<u8>("1,2,256").unwrap_err();
		assert!(matches!(&err, Error::Item { item: 3, text, .. } if text == "256"));
		assert_eq!(err.to_string(), "item 3: failed to parse \"256\"");
	}

	#[test]
	fn groups() {
		let input = indoc::indoc! { "

			a
			b


			c
			d
			e
		" };
		assert_eq!(blank_separated_groups(input), [vec!["a", "b"], vec!["c", "d", "e"]]);
		assert!(blank_separated_groups("").is_empty());
	}
}
