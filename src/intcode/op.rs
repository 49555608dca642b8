// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParMode { Pos, Imm, Rel }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgPos { First, Second, Third }

impl<T> std::ops::Index<ArgPos> for [T] {
	type Output = T;
	fn index(&self, index: ArgPos) -> &Self::Output {
		match index {
			ArgPos::First => &self[0],
			ArgPos::Second => &self[1],
			ArgPos::Third => &self[2],
		}
	}
}

/// Decoded opcode with its parameter modes. Modes of written parameters
/// (the last one of `Add`, `Mul`, `Lt`, `Eq`, and `In`) are never `Imm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
	Add([ParMode; 2], ParMode),
	Mul([ParMode; 2], ParMode),
	In(ParMode),
	Out(ParMode),
	JumpIf(bool, [ParMode; 2]),
	Lt([ParMode; 2], ParMode),
	Eq([ParMode; 2], ParMode),
	RelAdj(ParMode),
	Halt,
}

const PAR_MODE_COEFFS: [i64; 3] = [100, 1000, 10000];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum OpError {
	#[error("unknown opcode {0}")]
	Op(i64),
	#[error("opcode out of range")]
	OutOfRange,
	#[error("invalid mode {mode} for {pos:?} parameter")]
	ParMode { mode: i64, pos: ArgPos },
}

impl Op {
	/// Number of memory cells the instruction occupies, including the opcode.
	pub(crate) fn len(&self) -> usize {
		use Op::*;
		match self {
			Add(..) | Mul(..) | Lt(..) | Eq(..) => 4,
			JumpIf(..) => 3,
			In(_) | Out(_) | RelAdj(_) => 2,
			Halt => 1,
		}
	}
}

impl TryFrom<i64> for Op {
	type Error = OpError;
	fn try_from(value: i64) -> Result<Self, Self::Error> {
		if value == 99 { return Ok(Op::Halt) }
		if !(0..100_000).contains(&value) { return Err(OpError::Op(value)) }

		let par_mode = |pos: ArgPos| {
			let mode = value / PAR_MODE_COEFFS[pos] % 10;
			match mode {
				0 => Ok(ParMode::Pos),
				1 => Ok(ParMode::Imm),
				2 => Ok(ParMode::Rel),
				mode => Err(OpError::ParMode { mode, pos }),
			}
		};
		let write_par_mode = |pos: ArgPos| match par_mode(pos)? {
			ParMode::Imm => Err(OpError::ParMode { mode: 1, pos }),
			par_mode => Ok(par_mode),
		};
		// Single-parameter ops require the other mode digits to be zero
		let only_first = |par_mode: ParMode| {
			for pos in [ArgPos::Second, ArgPos::Third] {
				let mode = value / PAR_MODE_COEFFS[pos] % 10;
				if mode != 0 { return Err(OpError::ParMode { mode, pos }) }
			}
			Ok(par_mode)
		};

		let read_par_modes = || Ok::<_, OpError>([par_mode(ArgPos::First)?, par_mode(ArgPos::Second)?]);

		match value % 100 {
			1 => Ok(Op::Add(read_par_modes()?, write_par_mode(ArgPos::Third)?)),
			2 => Ok(Op::Mul(read_par_modes()?, write_par_mode(ArgPos::Third)?)),
			3 => Ok(Op::In(only_first(write_par_mode(ArgPos::First)?)?)),
			4 => Ok(Op::Out(only_first(par_mode(ArgPos::First)?)?)),
			5 => Ok(Op::JumpIf(true, read_par_modes()?)),
			6 => Ok(Op::JumpIf(false, read_par_modes()?)),
			7 => Ok(Op::Lt(read_par_modes()?, write_par_mode(ArgPos::Third)?)),
			8 => Ok(Op::Eq(read_par_modes()?, write_par_mode(ArgPos::Third)?)),
			9 => Ok(Op::RelAdj(only_first(par_mode(ArgPos::First)?)?)),
			_ => Err(OpError::Op(value)),
		}
	}
}

impl fmt::Display for Op {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Op::*;
		f.write_str(match self {
			Add(..) => "add",
			Mul(..) => "mul",
			In(_) => "in",
			Out(_) => "out",
			JumpIf(true, _) => "jit",
			JumpIf(false, _) => "jif",
			Lt(..) => "lt",
			Eq(..) => "eq",
			RelAdj(_) => "rel",
			Halt => "hlt",
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode() {
		use ParMode::*;
		assert_eq!(Op::try_from(1002), Ok(Op::Mul([Pos, Imm], Pos)));
		assert_eq!(Op::try_from(1101), Ok(Op::Add([Imm, Imm], Pos)));
		assert_eq!(Op::try_from(21107), Ok(Op::Lt([Imm, Imm], Rel)));
		assert_eq!(Op::try_from(203), Ok(Op::In(Rel)));
		assert_eq!(Op::try_from(104), Ok(Op::Out(Imm)));
		assert_eq!(Op::try_from(1105), Ok(Op::JumpIf(true, [Imm, Imm])));
		assert_eq!(Op::try_from(6), Ok(Op::JumpIf(false, [Pos, Pos])));
		assert_eq!(Op::try_from(209), Ok(Op::RelAdj(Rel)));
		assert_eq!(Op::try_from(99), Ok(Op::Halt));
		assert_eq!(Op::try_from(99).unwrap().len(), 1);
		assert_eq!(Op::try_from(1108).unwrap().to_string(), "eq");
	}

	#[test]
	fn decode_errors() {
		assert_eq!(Op::try_from(0), Err(OpError::Op(0)));
		assert_eq!(Op::try_from(-1), Err(OpError::Op(-1)));
		assert_eq!(Op::try_from(198), Err(OpError::Op(198)));
		assert_eq!(Op::try_from(301), Err(OpError::ParMode { mode: 3, pos: ArgPos::First }));
		assert_eq!(Op::try_from(11101), Err(OpError::ParMode { mode: 1, pos: ArgPos::Third }));
		assert_eq!(Op::try_from(103), Err(OpError::ParMode { mode: 1, pos: ArgPos::First }));
		assert_eq!(Op::try_from(1004), Err(OpError::ParMode { mode: 1, pos: ArgPos::Second }));
	}
}
