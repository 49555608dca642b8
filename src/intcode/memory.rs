// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use super::{Error, Word};


/// The program image, optionally followed by sparse extended memory in which
/// unwritten cells read as zero.
#[derive(Debug, Clone)]
pub(crate) struct Memory<W> {
	base: Vec<W>,
	ext: Option<HashMap<usize, W>>,
}

impl<W: Word> Memory<W> {
	pub(crate) fn new(base: Vec<W>) -> Self {
		Self { base, ext: None }
	}

	pub(crate) fn extend(&mut self) {
		self.ext.get_or_insert_with(HashMap::new);
	}

	/// Length of the program image.
	pub(crate) fn base_len(&self) -> usize {
		self.base.len()
	}

	#[cfg(test)]
	pub(crate) fn base(&self) -> &[W] {
		&self.base
	}

	pub(crate) fn read(&self, addr: usize) -> Result<W, Error> {
		if let Some(word) = self.base.get(addr) {
			Ok(word.clone())
		} else if let Some(ext) = &self.ext {
			Ok(ext.get(&addr).cloned().unwrap_or_default())
		} else {
			Err(Error::Read(addr))
		}
	}

	pub(crate) fn write(&mut self, addr: usize, word: W) -> Result<(), Error> {
		if let Some(cell) = self.base.get_mut(addr) {
			*cell = word;
		} else if let Some(ext) = &mut self.ext {
			ext.insert(addr, word);
		} else {
			return Err(Error::Write(addr))
		}
		Ok(())
	}
}


#[test]
fn tests() {
	let mut memory = Memory::new(vec![1_i64, 2, 3]);
	assert_eq!(memory.read(2).unwrap(), 3);
	assert!(matches!(memory.read(3), Err(Error::Read(3))));
	assert!(matches!(memory.write(10, 7), Err(Error::Write(10))));
	memory.write(0, 9).unwrap();

	memory.extend();
	assert_eq!(memory.read(1000).unwrap(), 0);
	memory.write(1000, 42).unwrap();
	assert_eq!(memory.read(1000).unwrap(), 42);
	assert_eq!(memory.base(), [9, 2, 3]);
	assert_eq!(memory.base_len(), 3);
}
