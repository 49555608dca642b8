// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Process-wide conditional logging: quiet by default, everything from
//! `Debug` up when `--verbose` is passed. `RUST_LOG` still wins when set.

use log::{Level, LevelFilter};


pub(crate) fn level_char(level: Level) -> char {
	match level {
		Level::Error => 'E',
		Level::Warn => 'W',
		Level::Info => 'I',
		Level::Debug => 'D',
		Level::Trace => 'T',
	}
}

pub(crate) fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
	use std::{io::Write as _, path::Path};

	env_logger::Builder::new()
		.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Off })
		.parse_default_env()
		.format(|buf, record| {
			let file = record.file()
				.and_then(|f| Path::new(f).file_name())
				.and_then(|f| f.to_str())
				.unwrap_or("?");
			writeln!(buf, "{} {file}:{} {}",
				level_char(record.level()), record.line().unwrap_or(0), record.args())
		})
		.try_init()
}


#[test]
fn tests() {
	assert_eq!(level_char(Level::Error), 'E');
	assert_eq!(level_char(Level::Info), 'I');
	assert_eq!(level_char(Level::Trace), 'T');
	assert!(init(true).is_ok());
	assert!(init(false).is_err(), "Only one logger per process");
	log::debug!("logger initialized");
}
