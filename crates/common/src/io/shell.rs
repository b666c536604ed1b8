//! Line oriented writers for stdout and stderr.
//!
//! Stdout carries command output only. Everything meant for a human goes to stderr so that
//! output can be piped into other tools.

use super::style::{ERROR, WARN};
use anstyle::Style;
use std::{
    fmt,
    io::{self, Write},
};

/// Writes `args` followed by a newline to stdout as one buffer, then flushes.
pub fn println(args: fmt::Arguments<'_>) -> io::Result<()> {
    let mut line = args.to_string();
    line.push('\n');
    write_line(&mut io::stdout().lock(), &line)
}

/// Writes a `Warning:` prefixed line to stderr.
pub fn warn(args: fmt::Arguments<'_>) -> io::Result<()> {
    eprint_styled(WARN, "Warning", args)
}

/// Writes an `Error:` prefixed line to stderr.
pub fn error(args: fmt::Arguments<'_>) -> io::Result<()> {
    eprint_styled(ERROR, "Error", args)
}

fn eprint_styled(style: Style, header: &str, args: fmt::Arguments<'_>) -> io::Result<()> {
    let line = format!("{style}{header}:{style:#} {args}\n");
    write_line(&mut anstream::stderr().lock(), &line)
}

pub(crate) fn write_line<W: Write + ?Sized>(w: &mut W, line: &str) -> io::Result<()> {
    w.write_all(line.as_bytes())?;
    w.flush()
}
