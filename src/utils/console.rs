//! Console helpers for the interactive end of the program.

use std::io::{self, BufRead, Write};

pub const EXIT_PROMPT: &str = "Press <ESC> to exit!";

const ESCAPE: char = '\u{1b}';

/// Blocks until an Escape character is read from `input` or input ends,
/// printing the exit prompt before every read
///
/// Terminals in line mode deliver Escape once Enter is pressed, so any line
/// containing it ends the wait.
pub fn wait_for_escape<R, W>(mut input: R, mut output: W) -> io::Result<()>
where
	R: BufRead,
	W: Write,
{
	let mut line = String::new();
	loop {
		writeln!(output, "{}", EXIT_PROMPT)?;
		output.flush()?;
		line.clear();
		if input.read_line(&mut line)? == 0 || line.contains(ESCAPE) {
			return Ok(());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn test_stops_on_escape_after_reprompting() {
		let input = Cursor::new("hello\n\n\u{1b}\nignored\n");
		let mut output = Vec::new();
		wait_for_escape(input, &mut output).unwrap();

		let text = String::from_utf8(output).unwrap();
		assert_eq!(text.matches(EXIT_PROMPT).count(), 3);
	}

	#[test]
	fn test_stops_at_end_of_input() {
		let mut output = Vec::new();
		wait_for_escape(Cursor::new(""), &mut output).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", EXIT_PROMPT));
	}
}
