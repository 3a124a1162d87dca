// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Console plus log-file output for the command line tool.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Writes every log line to stderr and appends it to a file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis();
    builder
}

/// Install the global logger. `RUST_LOG` still overrides `level`. If the
/// log file cannot be created the logger falls back to stderr only and the
/// error is returned so the caller can mention it.
pub fn init(log_file: &Path, level: LevelFilter) -> io::Result<()> {
    let mut builder = builder(level);

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(Tee { file })));
            let _ = builder.try_init();
            Ok(())
        }
        Err(e) => {
            let _ = builder.try_init();
            Err(e)
        }
    }
}
