// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Runs a [`Vm`] on its own thread, talking to it through channels.

use std::{sync::mpsc, thread};
use super::{Error, Vm, Word};


/// Inputs the VM has not consumed yet queue up to this many.
pub(crate) const MAILBOX_CAPACITY: usize = 2;

pub(crate) struct Handle<W> {
	pub(crate) input: mpsc::SyncSender<W>,
	/// Closes once the VM halts, or right after it sends an error.
	pub(crate) output: mpsc::Receiver<Result<W, Error>>,
	thread: thread::JoinHandle<()>,
}

pub(crate) fn spawn<W: Word>(id: impl Into<String>, mut vm: Vm<W>) -> Handle<W> {
	let id = id.into();
	let (input, input_rx) = mpsc::sync_channel(MAILBOX_CAPACITY);
	let (output_tx, output) = mpsc::channel();

	let thread = thread::spawn(move || {
		let mut input_rx = input_rx.iter();
		loop {
			match vm.next_output(&mut input_rx) {
				Ok(Some(word)) => {
					log::trace!("vm {id} sent {word}");
					if output_tx.send(Ok(word)).is_err() { break }
				}
				Ok(None) => {
					log::debug!("vm {id} halted");
					break
				}
				Err(source) => {
					log::debug!("vm {id} failed: {source}");
					let _ = output_tx.send(Err(Error::Vm { id, source: Box::new(source) }));
					break
				}
			}
		}
	});

	Handle { input, output, thread }
}

impl<W> Handle<W> {
	/// Closes both channels and waits for the VM's thread to finish.
	pub(crate) fn shutdown(self) {
		let Self { input, output, thread } = self;
		drop((input, output));
		if thread.join().is_err() {
			log::warn!("vm thread panicked");
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::intcode::parse;

	#[test]
	fn relay() {
		let vm = Vm::<i64>::new(parse("3,17,101,1,17,17,4,17,3,17,101,2,17,17,4,17,99,0").unwrap());
		let handle = spawn("test", vm);
		handle.input.send(7).unwrap();
		assert_eq!(handle.output.recv().unwrap().unwrap(), 8);
		handle.input.send(10).unwrap();
		assert_eq!(handle.output.recv().unwrap().unwrap(), 12);
		assert!(handle.output.recv().is_err());
		handle.shutdown();
	}

	#[test]
	fn failure() {
		let handle = spawn("broken", Vm::<i64>::new(parse("4,100,99").unwrap()));
		let err = handle.output.recv().unwrap().unwrap_err();
		assert!(matches!(&err, Error::Vm { id, source } if id == "broken" && matches!(**source, Error::Read(100))));
		assert!(handle.output.recv().is_err());
		handle.shutdown();
	}

	#[test]
	fn closed_input() {
		let Handle { input, output, thread } = spawn("starved", Vm::<i64>::new(parse("3,0,99").unwrap()));
		drop(input);
		assert!(matches!(output.recv().unwrap(), Err(Error::Vm { .. })));
		thread.join().unwrap();
	}
}
