// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt, ops::{Add, AddAssign}, str::FromStr};


#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
	#[error("expected {expected} coordinates, got {got}")]
	Parts { expected: usize, got: usize },
	#[error("invalid coordinate {0:?}")]
	Coord(String),
	#[error("invalid direction {0:?}")]
	Dir(String),
}

fn coords<const N: usize>(s: &str) -> Result<[i64; N], ParseError> {
	let parts = s.split(',').collect::<Vec<_>>();
	if parts.len() != N { return Err(ParseError::Parts { expected: N, got: parts.len() }) }
	let mut coords = [0; N];
	for (coord, part) in coords.iter_mut().zip(parts) {
		*coord = part.trim().parse().map_err(|_| ParseError::Coord(part.to_owned()))?;
	}
	Ok(coords)
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct P2 { pub(crate) x: i64, pub(crate) y: i64 }

impl P2 {
	pub(crate) const fn new(x: i64, y: i64) -> Self {
		Self { x, y }
	}

	pub(crate) fn manhattan_distance(&self, other: &Self) -> u64 {
		self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
	}

	/// Orthogonal neighbors first (W, E, N, S), then the diagonals if requested.
	pub(crate) fn all_neighbors(&self, include_diag: bool) -> Vec<Self> {
		let &Self { x, y } = self;
		let mut out = vec![Self::new(x - 1, y), Self::new(x + 1, y), Self::new(x, y - 1), Self::new(x, y + 1)];
		if include_diag {
			out.extend([Self::new(x - 1, y - 1), Self::new(x + 1, y - 1), Self::new(x - 1, y + 1), Self::new(x + 1, y + 1)]);
		}
		out
	}
}

impl Add for P2 {
	type Output = Self;
	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for P2 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs
	}
}

impl FromStr for P2 {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [x, y] = coords(s)?;
		Ok(Self { x, y })
	}
}

impl fmt::Display for P2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.x, self.y)
	}
}

/// Visits every position of a `num_x` by `num_y` area, row by row.
pub(crate) fn walk_p2(num_y: i64, num_x: i64) -> impl Iterator<Item = P2> {
	(0..num_y).flat_map(move |y| (0..num_x).map(move |x| P2::new(x, y)))
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct P3 { pub(crate) x: i64, pub(crate) y: i64, pub(crate) z: i64 }

impl P3 {
	pub(crate) const fn new(x: i64, y: i64, z: i64) -> Self {
		Self { x, y, z }
	}

	/// The 6 face neighbors first, then the 20 edge and corner neighbors if requested.
	pub(crate) fn all_neighbors(&self, include_diag: bool) -> Vec<Self> {
		let &Self { x, y, z } = self;
		let mut out = vec![
			Self::new(x - 1, y, z), Self::new(x + 1, y, z),
			Self::new(x, y + 1, z), Self::new(x, y - 1, z),
			Self::new(x, y, z + 1), Self::new(x, y, z - 1),
		];
		if include_diag {
			out.extend(itertools::iproduct!(-1..=1, -1..=1, -1..=1)
				.filter(|&(dx, dy, dz): &(i64, i64, i64)| dx.abs() + dy.abs() + dz.abs() > 1)
				.map(|(dx, dy, dz)| Self::new(x + dx, y + dy, z + dz)));
		}
		out
	}
}

impl FromStr for P3 {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [x, y, z] = coords(s)?;
		Ok(Self { x, y, z })
	}
}

impl fmt::Display for P3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{},{}", self.x, self.y, self.z)
	}
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct P4 { pub(crate) x: i64, pub(crate) y: i64, pub(crate) z: i64, pub(crate) w: i64 }

impl P4 {
	pub(crate) const fn new(x: i64, y: i64, z: i64, w: i64) -> Self {
		Self { x, y, z, w }
	}

	pub(crate) fn all_neighbors(&self) -> Vec<Self> {
		let &Self { x, y, z, w } = self;
		itertools::iproduct!(-1..=1, -1..=1, -1..=1, -1..=1)
			.filter(|&d| d != (0, 0, 0, 0))
			.map(|(dw, dz, dy, dx)| Self::new(x + dx, y + dy, z + dz, w + dw))
			.collect()
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Dir { North, South, West, East }

impl Dir {
	pub(crate) fn reverse(&self) -> Self {
		use Dir::*;
		match self { North => South, South => North, West => East, East => West }
	}

	pub(crate) fn left(&self) -> Self {
		use Dir::*;
		match self { North => West, South => East, West => South, East => North }
	}

	pub(crate) fn right(&self) -> Self {
		self.left().reverse()
	}

	pub(crate) fn from(&self, p: P2) -> P2 {
		self.steps_from(p, 1)
	}

	pub(crate) fn steps_from(&self, p: P2, num: i64) -> P2 {
		use Dir::*;
		p + match self {
			North => P2::new(0, -num),
			South => P2::new(0, num),
			West => P2::new(-num, 0),
			East => P2::new(num, 0),
		}
	}
}

impl FromStr for Dir {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		use Dir::*;
		match s {
			"N" => Ok(North),
			"S" => Ok(South),
			"W" => Ok(West),
			"E" => Ok(East),
			_ => Err(ParseError::Dir(s.to_owned())),
		}
	}
}

impl fmt::Display for Dir {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Dir::*;
		f.write_str(match self { North => "N", South => "S", West => "W", East => "E" })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn p2() {
		let p = "3,-4".parse::<P2>().unwrap();
		assert_eq!(p, P2::new(3, -4));
		assert_eq!(p.to_string(), "3,-4");
		assert_eq!("1,2,3".parse::<P2>(), Err(ParseError::Parts { expected: 2, got: 3 }));
		assert_eq!("1,b".parse::<P2>(), Err(ParseError::Coord("b".to_owned())));
		assert_eq!(p.manhattan_distance(&P2::new(-1, 1)), 9);
		assert!(P2::new(1, 9) < P2::new(2, 0));
		assert!(P2::new(1, 2) < P2::new(1, 3));

		let mut q = P2::new(1, 1);
		q += P2::new(2, -3);
		assert_eq!(q, P2::new(3, -2));

		assert_eq!(P2::new(0, 0).all_neighbors(false),
			[P2::new(-1, 0), P2::new(1, 0), P2::new(0, -1), P2::new(0, 1)]);
		assert_eq!(P2::new(0, 0).all_neighbors(true).len(), 8);

		assert_eq!(walk_p2(2, 3).collect::<Vec<_>>(), [
			P2::new(0, 0), P2::new(1, 0), P2::new(2, 0),
			P2::new(0, 1), P2::new(1, 1), P2::new(2, 1),
		]);
	}

	#[test]
	fn p3_and_p4() {
		use std::collections::HashSet;

		let p = "1,2,3".parse::<P3>().unwrap();
		assert_eq!(p.to_string(), "1,2,3");
		assert_eq!(p.all_neighbors(false).len(), 6);
		let all = p.all_neighbors(true);
		assert_eq!(all.len(), 26);
		assert_eq!(all.iter().collect::<HashSet<_>>().len(), 26);
		assert!(!all.contains(&p));

		let p = P4::new(0, 0, 0, 0);
		let all = p.all_neighbors();
		assert_eq!(all.len(), 80);
		assert_eq!(all.iter().collect::<HashSet<_>>().len(), 80);
		assert!(!all.contains(&p));
	}

	#[test]
	fn dir() {
		use Dir::*;
		assert_eq!("W".parse::<Dir>(), Ok(West));
		assert_eq!("Q".parse::<Dir>(), Err(ParseError::Dir("Q".to_owned())));
		assert_eq!(East.to_string(), "E");
		for dir in [North, South, West, East] {
			assert_eq!(dir.reverse().reverse(), dir);
			assert_eq!(dir.left().right(), dir);
			assert_eq!(dir.left().left(), dir.reverse());
		}
		assert_eq!(North.right(), East);
		assert_eq!(North.from(P2::new(0, 0)), P2::new(0, -1));
		assert_eq!(West.steps_from(P2::new(5, 5), 3), P2::new(2, 5));
	}
}
