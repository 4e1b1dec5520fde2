use std::io::BufRead;

use dialoguer::Input;
use eyre::{eyre, Result, WrapErr};

/// Prompt for a book title, `None` when the user enters nothing.
pub fn user_input_title() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Enter book title")
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))?;

    Ok(non_blank(&input))
}

/// Read the next title from a line based `reader`, `None` at a blank line or end of input.
pub fn read_line_title<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .wrap_err_with(|| eyre!("Cannot read the next title"))?;

    Ok(non_blank(&line))
}

fn non_blank(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        Some(input.to_owned())
    }
}

#[test]
fn blank_input_ends_the_prompt() {
    assert_eq!(None, non_blank(""));
    assert_eq!(None, non_blank("  \t"));
    assert_eq!(Some("Dune".to_owned()), non_blank("  Dune "));
}

#[test]
fn line_titles_are_read_until_blank_line_or_end() {
    let mut reader = std::io::Cursor::new("Dune\n  Children of Dune \r\n\nignored\n");

    assert_eq!(Some("Dune".to_owned()), read_line_title(&mut reader).unwrap());
    assert_eq!(
        Some("Children of Dune".to_owned()),
        read_line_title(&mut reader).unwrap()
    );
    assert_eq!(None, read_line_title(&mut reader).unwrap());

    let mut reader = std::io::Cursor::new("Dune");
    assert_eq!(Some("Dune".to_owned()), read_line_title(&mut reader).unwrap());
    assert_eq!(None, read_line_title(&mut reader).unwrap());
}
