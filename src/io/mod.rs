//! Reading conceptual maps dumped by the conceptual module.
//!
//! A dataset instance is a directory holding two files: `conceptual.fg`, the factor graph as
//! printed by libDAI, and `conceptual.info`, the names of its variables and factors.

pub mod fg;
pub mod info;

use crate::graph::{builder, Graph};
use crate::util::{Result, ConceptualError};

use tracing::debug;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;


/// Name of the factor graph file in a dataset directory
pub const FG_FILE: &str = "conceptual.fg";

/// Name of the info file in a dataset directory
pub const INFO_FILE: &str = "conceptual.info";


/// Load the conceptual map stored in the directory `dir`.
///
/// # Errors
/// * `ConceptualError::Io` if either file cannot be opened or read
/// * any parse or build error; no partial `Graph` is ever returned
pub fn load<P: AsRef<Path>>(dir: P) -> Result<Graph> {
    let dir = dir.as_ref();
    let fg = File::open(dir.join(FG_FILE))?;
    let info = File::open(dir.join(INFO_FILE))?;

    debug!("loading conceptual map from {}", dir.display());
    load_from(BufReader::new(fg), BufReader::new(info))
}


/// Load a conceptual map from a `.fg` stream and its matching `.info` stream.
///
/// Both streams are parsed to completion and cross-validated before the `Graph` is built.
pub fn load_from<F: BufRead, I: BufRead>(fg: F, info: I) -> Result<Graph> {
    let table = fg::parse(fg)?;
    let catalog = info::parse(info)?;
    builder::build(&table, &catalog)
}


/// Load every dataset directory in `dirs`. A failed directory yields its error and does not stop
/// the others from loading.
pub fn load_many<I>(dirs: I) -> impl Iterator<Item = (PathBuf, Result<Graph>)>
    where I: IntoIterator,
          I::Item: AsRef<Path>
{
    dirs.into_iter().map(|d| {
        let path = d.as_ref().to_path_buf();
        let graph = load(&path);
        (path, graph)
    })
}


/// Line-oriented reader shared by the parsers. Tracks the current line number for error reports.
pub(crate) struct Lines<R> {
    inner: io::Lines<R>,
    line: usize
}


impl<R: BufRead> Lines<R> {

    pub(crate) fn new(input: R) -> Self {
        Lines { inner: input.lines(), line: 0 }
    }

    /// The number of the last line read, starting at 1
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Read the next line without its terminator, or `None` at the end of the stream
    ///
    /// # Errors
    /// * `ConceptualError::Format` if the line is not valid UTF-8
    /// * `ConceptualError::Io` if reading fails
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        match self.inner.next() {
            Some(line) => {
                let mut line = line.map_err(|e| match e.kind() {
                    io::ErrorKind::InvalidData => ConceptualError::format(self.line + 1, "line is not valid UTF-8"),
                    _ => ConceptualError::Io(e)
                })?;
                if line.ends_with('\r') {
                    line.pop();
                }
                self.line += 1;
                Ok(Some(line))
            },
            None => Ok(None)
        }
    }

    /// Read the next line, failing if the stream ended
    pub(crate) fn expect_line(&mut self, what: &str) -> Result<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(ConceptualError::format(self.line + 1, format!("unexpected end of input, expected {}", what)))
        }
    }

    pub(crate) fn error<S: Into<String>>(&self, msg: S) -> ConceptualError {
        ConceptualError::format(self.line, msg)
    }

    /// Parse a single token of type `T`
    pub(crate) fn token<T: FromStr>(&self, tok: &str, what: &str) -> Result<T> {
        tok.parse().map_err(|_| self.error(format!("invalid {}: {:?}", what, tok)))
    }

    /// Read a line holding exactly one count
    pub(crate) fn count(&mut self, what: &str) -> Result<usize> {
        let line = self.expect_line(what)?;
        let toks = split(&line);
        if toks.len() != 1 {
            return Err(self.error(format!("expected {}, found {:?}", what, line)));
        }
        self.token(toks[0], what)
    }

    /// Read a line holding exactly `n` tokens of type `T`
    pub(crate) fn tokens<T: FromStr>(&mut self, n: usize, what: &str) -> Result<Vec<T>> {
        let line = self.expect_line(what)?;
        let toks = split(&line);
        if toks.len() != n {
            return Err(self.error(format!("expected {} {}, found {}", n, what, toks.len())));
        }
        toks.into_iter().map(|t| self.token(t, what)).collect()
    }

}


pub(crate) fn split(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn lines_numbered() {
        let mut lines = Lines::new("a\r\n\nb".as_bytes());
        assert_eq!(Some(String::from("a")), lines.next_line().unwrap());
        assert_eq!(1, lines.line());
        assert_eq!(Some(String::new()), lines.next_line().unwrap());
        assert_eq!("b", lines.expect_line("b").unwrap());
        assert_eq!(3, lines.line());
        assert_eq!(None, lines.next_line().unwrap());

        match lines.expect_line("more").expect_err("missing error") {
            ConceptualError::Format { line, .. } => assert_eq!(4, line),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn counts_and_tokens() {
        let mut lines = Lines::new(" 3 \n1 2 3\n1 x\n4 5\n".as_bytes());
        assert_eq!(3, lines.count("count").unwrap());
        assert_eq!(vec![1usize, 2, 3], lines.tokens::<usize>(3, "ids").unwrap());

        match lines.tokens::<usize>(2, "ids").expect_err("missing error") {
            ConceptualError::Format { line, .. } => assert_eq!(3, line),
            _ => panic!("wrong error type")
        };

        match lines.count("count").expect_err("missing error") {
            ConceptualError::Format { line, .. } => assert_eq!(4, line),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn invalid_utf8() {
        let input: &[u8] = b"1\n\xff\xfe\n";
        let mut lines = Lines::new(input);
        assert_eq!(Some(String::from("1")), lines.next_line().unwrap());

        match lines.next_line().expect_err("missing error") {
            ConceptualError::Format { line, .. } => assert_eq!(2, line),
            _ => panic!("wrong error type")
        };

        match fg::parse(&b"\xc3\n"[..]).expect_err("missing error") {
            ConceptualError::Format { line, .. } => assert_eq!(1, line),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn load_missing_dir() {
        match load("/nonexistent/conceptual/map").expect_err("missing error") {
            ConceptualError::Io(_) => assert!(true),
            _ => panic!("wrong error type")
        };
    }

}
