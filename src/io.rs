// Don't measure coverage, this is support code for CLI
#![cfg(not(tarpaulin_include))]

use color_eyre::eyre::Context;
use std::{
    fs::File,
    io::{BufWriter, Read, Stdin, Stdout, Write},
    path::PathBuf,
};

/// Source of a member list for the `show` command, a file given with `--input` or stdin
pub enum Input {
    File(File, PathBuf),
    Stdin(Stdin),
}

/// Opens the member list file, falling back to stdin when no `--input` was given
impl TryFrom<Option<PathBuf>> for Input {
    type Error = color_eyre::Report;

    fn try_from(path: Option<PathBuf>) -> Result<Self, Self::Error> {
        Ok(if let Some(path) = path {
            Self::File(
                File::open(&path)
                    .wrap_err(format!("Cannot open member list {}", &path.display()))?,
                path,
            )
        } else {
            Self::Stdin(std::io::stdin())
        })
    }
}

impl Input {
    /// Read the whole input and parse it as a member list
    pub fn read_members(mut self) -> color_eyre::Result<Vec<usize>> {
        let mut text = String::new();
        let reader: &mut dyn Read = match &mut self {
            Self::File(f, _) => f,
            Self::Stdin(s) => s,
        };
        reader
            .read_to_string(&mut text)
            .wrap_err(format!("Cannot read members from {self}"))?;
        natset::parse_members(&text).wrap_err(format!("Bad member list in {self}"))
    }
}

/// Names the member list source in error reports
impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(_, path) => path.display().fmt(f),
            Self::Stdin(_) => write!(f, "standard input"),
        }
    }
}

/// Destination of rendered sets, a file given with `--output` or stdout
pub enum Output {
    File(File, PathBuf),
    Stdout(Stdout),
}

/// Creates (or truncates) the result file, falling back to stdout when no `--output` was
/// given
impl TryFrom<Option<PathBuf>> for Output {
    type Error = color_eyre::Report;

    fn try_from(path: Option<PathBuf>) -> Result<Self, Self::Error> {
        Ok(if let Some(path) = path {
            Self::File(
                File::create(&path)
                    .wrap_err(format!("Cannot create result file {}", &path.display()))?,
                path,
            )
        } else {
            Self::Stdout(std::io::stdout())
        })
    }
}

impl Output {
    /// Buffered writer for this output, stdout gets locked
    pub fn writer(&mut self) -> BufWriter<Box<dyn Write + '_>> {
        let inner: Box<dyn Write + '_> = match self {
            Self::File(f, _) => Box::new(f),
            Self::Stdout(s) => Box::new(s.lock()),
        };
        BufWriter::new(inner)
    }
}

/// Names the result destination, used in error reports
impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(_, path) => path.display().fmt(f),
            Self::Stdout(_) => write!(f, "standard output"),
        }
    }
}
