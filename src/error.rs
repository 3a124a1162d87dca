// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures at the file boundary. Everything recoverable inside a
/// document is reported through a [`crate::report::Reporter`] instead.
#[derive(Error, Debug)]
pub enum GencadError {
    #[error("GENCAD file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Column {column} missing from {}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, GencadError>;
