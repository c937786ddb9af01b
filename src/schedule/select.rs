//! Interactive selection of one schedule entry.

use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("input stream closed")]
    Closed,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Resolve `entries` down to exactly one by prompting for a 1-based index.
///
/// A single entry is returned immediately without prompting. An empty line,
/// a non-numeric answer, or an out-of-range number re-prompts instead of
/// failing; only a closed or broken input stream is an error. Entries carry
/// their own line terminators, so the listing writes them verbatim.
pub fn select_entry<'a>(
    entries: &'a [String],
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<&'a str, SelectError> {
    if entries.len() == 1 {
        return Ok(&entries[0]);
    }

    loop {
        for (i, entry) in entries.iter().enumerate() {
            write!(output, "[{}] {entry}", i + 1)?;
        }
        writeln!(output)?;
        write!(
            output,
            "Which time signal do you delete [1-{}]: ",
            entries.len()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectError::Closed);
        }

        let answer = line.trim();
        if answer.is_empty() {
            continue;
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=entries.len()).contains(&n) => return Ok(&entries[n - 1]),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn entries(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("0{i} 07 * * * /usr/local/bin/speaker \"signal {i}\"\n"))
            .collect()
    }

    #[test]
    fn single_entry_returns_without_prompting() {
        let list = entries(1);
        let mut output = Vec::new();
        let picked = select_entry(&list, Cursor::new(""), &mut output).unwrap();
        assert_eq!(picked, list[0]);
        assert!(output.is_empty());
    }

    #[test]
    fn picks_the_numbered_entry() {
        let list = entries(3);
        let mut output = Vec::new();
        let picked = select_entry(&list, Cursor::new("3\n"), &mut output).unwrap();
        assert_eq!(picked, list[2]);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("[1] "));
        assert!(shown.contains("[3] "));
        assert!(shown.contains("[1-3]"));
    }

    #[test]
    fn reprompts_on_empty_and_out_of_range_input() {
        let list = entries(3);
        let mut output = Vec::new();
        let picked = select_entry(&list, Cursor::new("\n99\n2\n"), &mut output).unwrap();
        assert_eq!(picked, list[1]);

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Which time signal do you delete").count(), 3);
    }

    #[test]
    fn reprompts_on_non_numeric_input() {
        let list = entries(2);
        let picked = select_entry(&list, Cursor::new("abc\n1\n"), Vec::new()).unwrap();
        assert_eq!(picked, list[0]);
    }

    #[test]
    fn whitespace_only_input_reprompts() {
        let list = entries(2);
        let picked = select_entry(&list, Cursor::new("   \n2\n"), Vec::new()).unwrap();
        assert_eq!(picked, list[1]);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let list = entries(2);
        let result = select_entry(&list, Cursor::new("0\n"), Vec::new());
        assert!(matches!(result, Err(SelectError::Closed)));
    }
}
