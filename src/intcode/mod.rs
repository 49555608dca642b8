// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The “Intcode computer” of 2019, shared by days 2, 5, 7, and 9. Generic over
//! its word type, so programs with outsized numbers (day 9) can run on `BigInt`.

mod memory;
pub(crate) mod op;
pub(crate) mod threaded;

use std::{fmt::{Debug, Display}, str::FromStr};
use crate::filereader;
use memory::Memory;
use op::{ArgPos, Op, OpError, ParMode};


pub(crate) trait Word: Clone + Default + Debug + Display + PartialEq + PartialOrd + Send + 'static {
	fn from_bool(b: bool) -> Self;
	fn from_i64(i: i64) -> Self;
	fn to_i64(&self) -> Option<i64>;
	/// `None` on overflow.
	fn checked_add(&self, rhs: &Self) -> Option<Self>;
	fn checked_mul(&self, rhs: &Self) -> Option<Self>;
}

impl Word for i64 {
	fn from_bool(b: bool) -> Self {
		i64::from(b)
	}

	fn from_i64(i: i64) -> Self {
		i
	}

	fn to_i64(&self) -> Option<i64> {
		Some(*self)
	}

	fn checked_add(&self, rhs: &Self) -> Option<Self> {
		i64::checked_add(*self, *rhs)
	}

	fn checked_mul(&self, rhs: &Self) -> Option<Self> {
		i64::checked_mul(*self, *rhs)
	}
}

impl Word for num_bigint::BigInt {
	fn from_bool(b: bool) -> Self {
		Self::from(u8::from(b))
	}

	fn from_i64(i: i64) -> Self {
		Self::from(i)
	}

	fn to_i64(&self) -> Option<i64> {
		i64::try_from(self).ok()
	}

	fn checked_add(&self, rhs: &Self) -> Option<Self> {
		Some(self + rhs)
	}

	fn checked_mul(&self, rhs: &Self) -> Option<Self> {
		Some(self * rhs)
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("invalid program")]
	Parse(#[from] filereader::Error),
	#[error("unexpected non-op instruction {value} at position {pos}")]
	Op { pos: usize, value: String, source: OpError },
	#[error("unexpected end of program at position {0}")]
	EndOfProgram(usize),
	#[error("unexpected end of input at position {0}")]
	EndOfInput(usize),
	#[error("using invalid value {0} as memory address")]
	Address(String),
	#[error("reading outside unextended memory at position {0}")]
	Read(usize),
	#[error("writing outside unextended memory at position {0}")]
	Write(usize),
	#[error("arithmetic overflow at position {0}")]
	Overflow(usize),
	#[error("vm {id} failed")]
	Vm { id: String, source: Box<Error> },
}

/// Parses comma-separated words; the program may be wrapped across lines.
pub(crate) fn parse<W>(s: &str) -> Result<Vec<W>, Error>
where W: Word + FromStr, W::Err: std::error::Error + Send + Sync + 'static {
	let joined = s.split_whitespace().collect::<String>();
	let joined = joined.strip_suffix(',').unwrap_or(&joined);
	Ok(filereader::parse_numbers_from_line(joined)?)
}


#[derive(Debug, Clone)]
pub(crate) struct Vm<W = i64> {
	memory: Memory<W>,
	pc: usize,
	rel_base: i64,
}

fn address<W: Word>(word: &W) -> Result<usize, Error> {
	word.to_i64()
		.and_then(|i| usize::try_from(i).ok())
		.ok_or_else(|| Error::Address(word.to_string()))
}

impl<W: Word> Vm<W> {
	pub(crate) fn new(program: Vec<W>) -> Self {
		Self { memory: Memory::new(program), pc: 0, rel_base: 0 }
	}

	pub(crate) fn with_ext_memory(mut self) -> Self {
		self.memory.extend();
		self
	}

	pub(crate) fn peek(&self, addr: usize) -> Result<W, Error> {
		self.memory.read(addr)
	}

	pub(crate) fn poke(&mut self, addr: usize, word: W) -> Result<(), Error> {
		self.memory.write(addr, word)
	}

	/// The program image, as modified by running it so far.
	#[cfg(test)]
	pub(crate) fn memory(&self) -> &[W] {
		self.memory.base()
	}

	pub(crate) fn is_halted(&self) -> bool {
		self.decode().map_or(false, |op| op == Op::Halt)
	}

	fn decode(&self) -> Result<Op, Error> {
		if self.pc >= self.memory.base_len() { return Err(Error::EndOfProgram(self.pc)) }
		let word = self.memory.read(self.pc)?;
		word.to_i64()
			.ok_or(OpError::OutOfRange)
			.and_then(Op::try_from)
			.map_err(|source| Error::Op { pos: self.pc, value: word.to_string(), source })
	}

	fn arg_addr(&self, arg_pos: ArgPos, par_mode: ParMode) -> Result<usize, Error> {
		let pos = self.pc + 1 + arg_pos as usize;
		match par_mode {
			ParMode::Pos => address(&self.memory.read(pos)?),
			ParMode::Imm => Ok(pos),
			ParMode::Rel => {
				let delta = self.memory.read(pos)?;
				delta.to_i64()
					.and_then(|d| d.checked_add(self.rel_base))
					.and_then(|a| usize::try_from(a).ok())
					.ok_or_else(|| Error::Address(format!("{}{:+}", self.rel_base, delta)))
			}
		}
	}

	fn arg(&self, arg_pos: ArgPos, par_mode: ParMode) -> Result<W, Error> {
		self.memory.read(self.arg_addr(arg_pos, par_mode)?)
	}

	/// Executes a single instruction, returning its output if it was an `out`.
	/// Halting leaves the program counter on the `hlt` instruction.
	pub(crate) fn step(&mut self, input: impl FnOnce() -> Option<W>) -> Result<Option<W>, Error> {
		use {ArgPos::*, Op::*};

		let op = self.decode()?;
		if self.pc + op.len() > self.memory.base_len() { return Err(Error::EndOfProgram(self.pc)) }
		log::trace!("{}: {op} (rel. base {})", self.pc, self.rel_base);

		match op {
			Add(par_modes, dest) | Mul(par_modes, dest) | Lt(par_modes, dest) | Eq(par_modes, dest) => {
				let arg0 = self.arg(First, par_modes[First])?;
				let arg1 = self.arg(Second, par_modes[Second])?;
				let dest = self.arg_addr(Third, dest)?;
				let word = match op {
					Add(..) => arg0.checked_add(&arg1).ok_or(Error::Overflow(self.pc))?,
					Mul(..) => arg0.checked_mul(&arg1).ok_or(Error::Overflow(self.pc))?,
					Lt(..) => W::from_bool(arg0 < arg1),
					Eq(..) => W::from_bool(arg0 == arg1),
					_ => unreachable!(),
				};
				self.memory.write(dest, word)?;
				self.pc += op.len();
			}
			In(dest) => {
				let dest = self.arg_addr(First, dest)?;
				let word = input().ok_or(Error::EndOfInput(self.pc))?;
				self.memory.write(dest, word)?;
				self.pc += op.len();
			}
			Out(par_mode) => {
				let word = self.arg(First, par_mode)?;
				self.pc += op.len();
				return Ok(Some(word))
			}
			JumpIf(flag, par_modes) => {
				if (self.arg(First, par_modes[First])? != W::default()) == flag {
					self.pc = address(&self.arg(Second, par_modes[Second])?)?;
				} else {
					self.pc += op.len();
				}
			}
			RelAdj(par_mode) => {
				let delta = self.arg(First, par_mode)?;
				self.rel_base = delta.to_i64()
					.and_then(|d| self.rel_base.checked_add(d))
					.ok_or_else(|| Error::Address(format!("{}{:+}", self.rel_base, delta)))?;
				self.pc += op.len();
			}
			Halt => (),
		}

		Ok(None)
	}

	/// Runs until the next output (`Some`), or until halting (`None`).
	pub(crate) fn next_output(&mut self, input: &mut impl Iterator<Item = W>) -> Result<Option<W>, Error> {
		loop {
			if let Some(output) = self.step(|| input.next())? {
				return Ok(Some(output))
			} else if self.is_halted() {
				return Ok(None)
			}
		}
	}

	/// Iterates over all outputs; iteration ends after halting or the first error.
	pub(crate) fn execute<'a, I>(&'a mut self, input: I) -> impl Iterator<Item = Result<W, Error>> + 'a
	where I: IntoIterator<Item = W>, I::IntoIter: 'a {
		let mut input = input.into_iter();
		let mut done = false;
		std::iter::from_fn(move || {
			if done { return None }
			let output = self.next_output(&mut input).transpose();
			done = !matches!(output, Some(Ok(_)));
			output
		})
	}

	pub(crate) fn run(&mut self, input: impl IntoIterator<Item = W>) -> Result<Vec<W>, Error> {
		self.execute(input).collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn vm(s: &str) -> Vm {
		Vm::new(parse(s).unwrap())
	}

	#[test]
	fn parsing() {
		assert_eq!(parse::<i64>("1,2,\n3, 4,\n").unwrap(), [1, 2, 3, 4]);
		assert!(matches!(parse::<i64>("1,x"), Err(Error::Parse(filereader::Error::Item { item: 2, .. }))));
	}

	#[test]
	fn memory_after_run() {
		let mut p = vm("1,9,10,3,2,3,11,0,99,30,40,50");
		assert!(p.run([]).unwrap().is_empty());
		assert!(p.is_halted());
		assert_eq!(p.memory(), [3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]);

		let mut p = vm("1101,100,-1,4,0");
		p.run([]).unwrap();
		assert_eq!(p.peek(4).unwrap(), 99);
	}

	#[test]
	fn io() {
		assert_eq!(vm("3,9,1001,9,1,9,4,9,99,0").run([15]).unwrap(), [16]);
		assert_eq!(vm("1107,0,1,13,1108,0,1,14,4,13,4,14,99,0,0").run([]).unwrap(), [1, 0]);
		assert_eq!(vm("109,7,204,-2,99,42").run([]).unwrap(), [42]);
		assert!(matches!(vm("3,0,99").run([]), Err(Error::EndOfInput(0))));
	}

	#[test]
	fn stepping() {
		let mut p = vm("3,8,4,8,1105,1,0,99,0");
		let mut input = [5, 6].into_iter();
		assert_eq!(p.step(|| input.next()).unwrap(), None);
		assert_eq!(p.step(|| None).unwrap(), Some(5));
		assert_eq!(p.next_output(&mut input).unwrap(), Some(6));
		assert!(matches!(p.next_output(&mut input), Err(Error::EndOfInput(0))));
	}

	#[test]
	fn faults() {
		assert!(matches!(vm("4,100,99").run([]), Err(Error::Read(100))));
		assert_eq!(vm("4,100,99").with_ext_memory().run([]).unwrap(), [0]);
		assert!(matches!(vm("1,0,0").run([]), Err(Error::EndOfProgram(0))));
		assert!(matches!(vm("1105,1,4").run([]), Err(Error::EndOfProgram(4))));
		assert!(matches!(vm("1105,1,-3").run([]), Err(Error::Address(a)) if a == "-3"));
		assert!(matches!(vm("42").run([]), Err(Error::Op { pos: 0, source: OpError::Op(42), .. })));

		let mut p = vm("104,7,42");
		let mut outputs = p.execute([]);
		assert_eq!(outputs.next().unwrap().unwrap(), 7);
		assert!(outputs.next().unwrap().is_err());
		assert!(outputs.next().is_none());
	}

	#[test]
	fn overflow() {
		let mut p = vm("1102,4611686018427387904,4,0,99");
		assert!(matches!(p.run([]), Err(Error::Overflow(0))));
		assert!(matches!(vm("1001,4,1,4,9223372036854775807").run([]), Err(Error::Overflow(0))));

		use num_bigint::BigInt;
		let mut p = Vm::<BigInt>::new(parse("1102,4611686018427387904,4,0,4,0,99").unwrap());
		assert_eq!(p.run([]).unwrap(), [BigInt::from(1_u8) << 64]);

		let mut p = Vm::<BigInt>::new(parse("100000000000000000000").unwrap());
		assert!(matches!(p.run([]), Err(Error::Op { pos: 0, value, source: OpError::OutOfRange }) if value == "100000000000000000000"));
	}
}
