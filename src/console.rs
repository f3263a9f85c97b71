//! The console read loop that feeds a tree. Lines are read one at a time: integers are inserted,
//! `done` ends the session, and anything else is reported and skipped. Once input ends the keys are
//! printed in ascending order on a single line.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{boxed::Tree, console};
//!
//! let input = "5\n3\nfive\n8\n3\ndone\n42\n";
//! let mut output = Vec::new();
//! let mut tree: Tree<i32> = Tree::new();
//!
//! console::run(input.as_bytes(), &mut output, &mut tree).unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.ends_with("Inorder traversal of the given tree:\n3 5 8\n"));
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::{arena, boxed};

const PROMPT: &str = "Enter numbers to insert into the binary tree (type 'done' to finish):";
const INVALID_INPUT: &str = "Invalid input. Please enter a valid integer or 'done' to finish.";
const TRAVERSAL_HEADER: &str = "Inorder traversal of the given tree:";

/// A line that couldn't be turned into a [`Command`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line was neither an integer nor `done`.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
}

/// Failures that end a console session early.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading a line or writing a response failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One line of console input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert this key into the tree.
    Insert(i32),
    /// Stop reading and print the tree.
    Done,
}

impl FromStr for Command {
    type Err = ParseError;

    /// Surrounding whitespace is ignored and `done` is matched case-insensitively.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("done") {
            return Ok(Self::Done);
        }
        line.parse()
            .map(Self::Insert)
            .map_err(|_| ParseError::InvalidInput(line.to_owned()))
    }
}

/// Anything the console can insert integers into and read them back from in ascending order.
pub trait Keys {
    /// Inserts `key`, ignoring it if it is already present.
    fn insert(&mut self, key: i32);

    /// Every key, smallest first.
    fn ascending(&self) -> Box<dyn Iterator<Item = i32> + '_>;
}

impl Keys for boxed::Tree<i32> {
    fn insert(&mut self, key: i32) {
        boxed::Tree::insert(self, key)
    }

    fn ascending(&self) -> Box<dyn Iterator<Item = i32> + '_> {
        Box::new(self.in_order().copied())
    }
}

impl Keys for arena::Tree<i32> {
    fn insert(&mut self, key: i32) {
        arena::Tree::insert(self, key)
    }

    fn ascending(&self) -> Box<dyn Iterator<Item = i32> + '_> {
        Box::new(self.in_order().copied())
    }
}

/// Prompts for integers on `output`, inserts every one read from `input` into `tree` until a
/// `done` line or the end of input, then writes the in-order traversal.
///
/// Lines that don't parse are answered with a hint and skipped. Only I/O failures are errors.
pub fn run<R, W, T>(input: R, mut output: W, tree: &mut T) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
    T: Keys + ?Sized,
{
    writeln!(output, "{}", PROMPT)?;

    let mut rejected = 0;
    for line in input.lines() {
        match line?.parse::<Command>() {
            Ok(Command::Insert(key)) => {
                log::debug!("inserting {}", key);
                tree.insert(key);
            }
            Ok(Command::Done) => break,
            Err(e) => {
                log::debug!("{}", e);
                rejected += 1;
                writeln!(output, "{}", INVALID_INPUT)?;
            }
        }
    }
    if rejected > 0 {
        log::info!("skipped {} invalid line(s)", rejected);
    }

    writeln!(output, "{}", TRAVERSAL_HEADER)?;
    write_keys(&mut output, tree.ascending())?;
    output.flush()?;
    Ok(())
}

/// Writes `keys` on one line separated by single spaces.
pub fn write_keys<W, I>(mut output: W, keys: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = i32>,
{
    let mut keys = keys.into_iter();
    if let Some(first) = keys.next() {
        write!(output, "{}", first)?;
        for key in keys {
            write!(output, " {}", key)?;
        }
    }
    writeln!(output)
}
