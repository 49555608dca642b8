// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The “assembunny” register machine of 2016, used by days 12, 23, and 25.
//!
//! Besides the puzzle instructions (`cpy`, `inc`, `dec`, `jnz`, `tgl`, and
//! `out`), programs may use `add x y`, `mul x y`, and `nop`, which come in
//! handy when optimising programs by hand. Source lines may carry a leading
//! line number and `#` comments.

use std::{fmt, str::FromStr};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Reg { A, B, C, D }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Arg { Reg(Reg), Imm(i64) }

/// Arguments are kept general, since toggling may turn a valid instruction
/// into one that writes to an immediate. Such instructions are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Instr {
	Cpy(Arg, Arg),
	Inc(Arg),
	Dec(Arg),
	Jnz(Arg, Arg),
	Tgl(Arg),
	Out(Arg),
	Add(Arg, Arg),
	Mul(Arg, Arg),
	Nop,
}

impl Instr {
	pub(crate) fn toggled(self) -> Self {
		use Instr::*;
		match self {
			Inc(x) => Dec(x),
			Dec(x) | Tgl(x) | Out(x) => Inc(x),
			Jnz(x, y) => Cpy(x, y),
			Cpy(x, y) => Jnz(x, y),
			Add(..) | Mul(..) | Nop => self,
		}
	}
}


#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
	#[error("unknown instruction {0:?}")]
	Op(String),
	#[error("invalid argument {0:?}")]
	Arg(String),
	#[error("{op} takes {expected} argument(s), got {got}")]
	Arity { op: String, expected: usize, got: usize },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Error {
	#[error("line {line}")]
	Parse { line: usize, source: ParseError },
	#[error("no output within {0} steps")]
	Budget(u64),
	#[error("register overflow at {0}")]
	Overflow(i64),
}

impl FromStr for Reg {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"a" => Ok(Reg::A),
			"b" => Ok(Reg::B),
			"c" => Ok(Reg::C),
			"d" => Ok(Reg::D),
			_ => Err(ParseError::Arg(s.to_owned())),
		}
	}
}

impl FromStr for Arg {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(Arg::Reg)
			.or_else(|_| s.trim_start_matches('+').parse().map(Arg::Imm))
			.map_err(|_| ParseError::Arg(s.to_owned()))
	}
}

impl FromStr for Instr {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut words = s.split_whitespace();
		let op = words.next().unwrap_or_default();
		let args = words.map(Arg::from_str).collect::<Result<Vec<_>, _>>()?;

		let expected = match op {
			"nop" => 0,
			"inc" | "dec" | "tgl" | "out" => 1,
			"cpy" | "jnz" | "add" | "mul" => 2,
			_ => return Err(ParseError::Op(op.to_owned())),
		};
		if args.len() != expected {
			return Err(ParseError::Arity { op: op.to_owned(), expected, got: args.len() })
		}

		use Instr::*;
		Ok(match (op, &args[..]) {
			("nop", []) => Nop,
			("inc", &[x]) => Inc(x),
			("dec", &[x]) => Dec(x),
			("tgl", &[x]) => Tgl(x),
			("out", &[x]) => Out(x),
			("cpy", &[x, y]) => Cpy(x, y),
			("jnz", &[x, y]) => Jnz(x, y),
			("add", &[x, y]) => Add(x, y),
			("mul", &[x, y]) => Mul(x, y),
			_ => unreachable!(),
		})
	}
}

pub(crate) fn parse(s: &str) -> Result<Vec<Instr>, Error> {
	s.lines()
		.enumerate()
		.filter_map(|(l, line)| {
			let line = line.split('#').next().unwrap_or_default().trim();
			let line = match line.split_once(char::is_whitespace) {
				Some((num, rest)) if num.parse::<u32>().is_ok() => rest.trim_start(),
				_ => line,
			};
			(!line.is_empty()).then(|| line.parse()
				.map_err(|source| Error::Parse { line: l + 1, source }))
		})
		.collect()
}


impl fmt::Display for Reg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self { Reg::A => "a", Reg::B => "b", Reg::C => "c", Reg::D => "d" })
	}
}

impl fmt::Display for Arg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Arg::Reg(reg) => reg.fmt(f),
			Arg::Imm(imm) => imm.fmt(f),
		}
	}
}

impl fmt::Display for Instr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Instr::*;
		match self {
			Cpy(x, y) => write!(f, "cpy {x} {y}"),
			Inc(x) => write!(f, "inc {x}"),
			Dec(x) => write!(f, "dec {x}"),
			Jnz(x, y) => write!(f, "jnz {x} {y}"),
			Tgl(x) => write!(f, "tgl {x}"),
			Out(x) => write!(f, "out {x}"),
			Add(x, y) => write!(f, "add {x} {y}"),
			Mul(x, y) => write!(f, "mul {x} {y}"),
			Nop => f.write_str("nop"),
		}
	}
}


#[derive(Debug, Clone)]
pub(crate) struct Cpu {
	regs: [i64; 4],
	pc: i64,
	program: Vec<Instr>,
	optimise: bool,
}

impl Cpu {
	pub(crate) fn new(program: Vec<Instr>) -> Self {
		Self { regs: [0; 4], pc: 0, program, optimise: true }
	}

	/// Whether multiplication loops run in a single step.
	#[cfg(test)]
	pub(crate) fn optimise(self, optimise: bool) -> Self {
		Self { optimise, ..self }
	}

	pub(crate) fn reg(&self, reg: Reg) -> i64 {
		self.regs[reg as usize]
	}

	pub(crate) fn set_reg(&mut self, reg: Reg, value: i64) {
		self.regs[reg as usize] = value;
	}

	/// Program counter and registers. Toggling can change the program too, see
	/// [`Cpu::program`].
	pub(crate) fn state(&self) -> (i64, [i64; 4]) {
		(self.pc, self.regs)
	}

	pub(crate) fn program(&self) -> &[Instr] {
		&self.program
	}

	pub(crate) fn is_halted(&self) -> bool {
		!(0..self.program.len() as i64).contains(&self.pc)
	}

	pub(crate) fn run(&mut self) -> Result<(), Error> {
		while !self.is_halted() {
			if let Some(output) = self.step()? {
				log::debug!("output {output}");
			}
		}
		log::debug!("halted with registers {:?}", self.regs);
		Ok(())
	}

	/// Runs until the next `out`, returning `None` on halting. With a `budget`,
	/// running more than that many steps before either is an error.
	pub(crate) fn next_output(&mut self, budget: Option<u64>) -> Result<Option<i64>, Error> {
		let mut steps = 0;
		while !self.is_halted() {
			if budget.map_or(false, |budget| steps >= budget) {
				return Err(Error::Budget(steps))
			}
			steps += 1;
			if let Some(output) = self.step()? {
				return Ok(Some(output))
			}
		}
		Ok(None)
	}

	fn value(&self, arg: Arg) -> i64 {
		match arg {
			Arg::Reg(reg) => self.reg(reg),
			Arg::Imm(imm) => imm,
		}
	}

	/// Sets `reg` to `f` of its value; `None` means the arithmetic overflowed.
	fn update(&mut self, reg: Reg, f: impl FnOnce(i64) -> Option<i64>) -> Result<(), Error> {
		let value = f(self.reg(reg)).ok_or(Error::Overflow(self.pc))?;
		self.set_reg(reg, value);
		Ok(())
	}

	fn step(&mut self) -> Result<Option<i64>, Error> {
		use {Arg::Reg as R, Instr::*};

		let pc = self.pc as usize;
		if self.optimise && self.multiply(pc)? { return Ok(None) }

		let instr = self.program[pc];
		log::trace!("{pc}: {instr} {:?}", self.regs);
		let mut offset = 1;
		let mut output = None;
		match instr {
			Cpy(x, R(y)) => self.set_reg(y, self.value(x)),
			Inc(R(x)) => self.update(x, |v| v.checked_add(1))?,
			Dec(R(x)) => self.update(x, |v| v.checked_sub(1))?,
			Jnz(x, y) => if self.value(x) != 0 { offset = self.value(y) },
			Tgl(x) => self.toggle(self.pc.saturating_add(self.value(x))),
			Out(x) => output = Some(self.value(x)),
			Add(x, R(y)) => { let x = self.value(x); self.update(y, |v| v.checked_add(x))? }
			Mul(x, R(y)) => { let x = self.value(x); self.update(y, |v| v.checked_mul(x))? }
			Nop => (),
			invalid => log::debug!("{pc}: skipping invalid {invalid}"),
		}
		self.pc = self.pc.saturating_add(offset);
		Ok(output)
	}

	fn toggle(&mut self, target: i64) {
		let Some(instr) = usize::try_from(target).ok().and_then(|t| self.program.get_mut(t)) else {
			log::debug!("toggle target {target} out of range");
			return
		};
		let toggled = instr.toggled();
		log::debug!("toggled {target}: {instr} is now {toggled}");
		*instr = toggled;
	}

	/// Recognizes a multiplication loop starting at `pc`, in the program as
	/// currently toggled, and if found runs it at once.
	fn multiply(&mut self, pc: usize) -> Result<bool, Error> {
		use {Arg::{Imm, Reg as R}, Instr::*};

		let (a, factors, cleared, len) = match self.program[pc..] {
			// cpy b c; inc a; dec c; jnz c -2; dec d; jnz d -5
			[Cpy(b, R(c0)), Inc(R(a)), Dec(R(c1)), Jnz(R(c2), Imm(-2)), Dec(R(d0)), Jnz(R(d1), Imm(-5)), ..]
					if c0 == c1 && c1 == c2 && d0 == d1 && a != c0 && a != d0 && c0 != d0
					&& ![R(a), R(c0), R(d0)].contains(&b) => (a, [b, R(d0)], [c0, d0], 6),
			// inc a; dec c; jnz c -2 (in either order)
			[Inc(R(a)), Dec(R(c0)), Jnz(R(c1), Imm(-2)), ..] | [Dec(R(c0)), Inc(R(a)), Jnz(R(c1), Imm(-2)), ..]
					if c0 == c1 && a != c0 => (a, [R(c0), Imm(1)], [c0, c0], 3),
			_ => return Ok(false),
		};

		// Counters that start out non-positive make the loop (practically) endless
		let [x, y] = factors.map(|arg| self.value(arg));
		if x <= 0 || y <= 0 { return Ok(false) }

		log::trace!("{pc}: {a} += {} * {}", factors[0], factors[1]);
		self.update(a, |v| x.checked_mul(y).and_then(|p| v.checked_add(p)))?;
		for reg in cleared { self.set_reg(reg, 0) }
		self.pc += len;
		Ok(true)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parsing() {
		use {Arg::Imm, Instr::*};
		let program = parse(indoc::indoc! { "
			# header
			cpy 41 a
			1 inc a   # bump
			jnz a +2

			nop
			jnz 1 c
		" }).unwrap();
		assert_eq!(program, [
			Cpy(Imm(41), Arg::Reg(Reg::A)),
			Inc(Arg::Reg(Reg::A)),
			Jnz(Arg::Reg(Reg::A), Imm(2)),
			Nop,
			Jnz(Imm(1), Arg::Reg(Reg::C)),
		]);
		assert_eq!(program[0].to_string(), "cpy 41 a");

		assert_eq!(parse("inc a\nfoo a"), Err(Error::Parse { line: 2, source: ParseError::Op("foo".into()) }));
		assert_eq!(parse("cpy a"), Err(Error::Parse { line: 1, source: ParseError::Arity { op: "cpy".into(), expected: 2, got: 1 } }));
		assert_eq!(parse("inc e"), Err(Error::Parse { line: 1, source: ParseError::Arg("e".into()) }));
	}

	#[test]
	fn toggling() {
		let program = parse("inc a\ndec a\ntgl a\nout a\njnz 1 a\ncpy 1 a\nmul a b").unwrap();
		let toggled = program.iter().map(|i| i.toggled().to_string()).collect::<Vec<_>>();
		assert_eq!(toggled, ["dec a", "inc a", "inc a", "inc a", "cpy 1 a", "jnz 1 a", "mul a b"]);

		let mut cpu = Cpu::new(parse("cpy 2 a\ntgl a\ntgl a\ntgl a\ncpy 1 a\ndec a\ndec a").unwrap());
		cpu.run().unwrap();
		assert_eq!(cpu.reg(Reg::A), 3);
		assert_eq!(cpu.program()[3].to_string(), "inc a");

		// Out-of-range targets and invalid instructions are skipped
		let mut cpu = Cpu::new(parse("tgl 9\ncpy 2 b\ntgl b\nnop\njnz 7 1\ninc a").unwrap());
		cpu.run().unwrap();
		assert_eq!(cpu.program()[5].to_string(), "inc a");
		assert_eq!(cpu.program()[4].to_string(), "cpy 7 1");
		assert_eq!(cpu.reg(Reg::A), 1);
	}

	#[test]
	fn multiplication() {
		let source = indoc::indoc! { "
			cpy 3 b
			cpy 4 d
			cpy b c
			inc a
			dec c
			jnz c -2
			dec d
			jnz d -5
			inc c
			dec a
			inc d
			jnz a -2
		" };
		for optimise in [true, false] {
			let mut cpu = Cpu::new(parse(source).unwrap()).optimise(optimise);
			cpu.set_reg(Reg::A, 1);
			cpu.run().unwrap();
			assert_eq!(cpu.state(), (12, [0, 3, 1, 13]));
		}
	}

	#[test]
	fn outputs() {
		let source = "cpy 2 a\nout a\ndec a\njnz a -2\nout 7";
		let mut cpu = Cpu::new(parse(source).unwrap());
		assert_eq!(cpu.next_output(None), Ok(Some(2)));
		assert_eq!(cpu.next_output(None), Ok(Some(1)));
		assert_eq!(cpu.next_output(Some(2)), Err(Error::Budget(2)));
		assert_eq!(cpu.next_output(Some(1)), Ok(Some(7)));
		assert_eq!(cpu.next_output(None), Ok(None));
		assert!(cpu.is_halted());
	}

	#[test]
	fn overflow() {
		let mut cpu = Cpu::new(parse("cpy 9223372036854775807 a\ninc a").unwrap());
		assert_eq!(cpu.run(), Err(Error::Overflow(1)));
		assert_eq!(cpu.reg(Reg::A), i64::MAX);

		let mut cpu = Cpu::new(parse("cpy -9223372036854775807 b\nmul 2 b\nout b").unwrap());
		assert_eq!(cpu.next_output(None), Err(Error::Overflow(1)));

		for optimise in [true, false] {
			let mut cpu = Cpu::new(parse("cpy 2 c\ninc a\ndec c\njnz c -2").unwrap()).optimise(optimise);
			cpu.set_reg(Reg::A, i64::MAX - 1);
			assert_eq!(cpu.run(), Err(Error::Overflow(1)));
		}
	}
}
