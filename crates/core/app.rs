use std::io::Write;

use bookfind::{BookRecord, Client, Searcher};
use eyre::{Report, Result, WrapErr};
use log::{debug, info};

use crate::render::{error_message, render, Format};

/// Search for a single `title` and write the books to `out`.
///
/// A failed search is returned as an `Err` carrying the message meant for the user.
pub fn search_once<C, W>(
    searcher: &Searcher<C>,
    title: &str,
    format: Format,
    out: &mut W,
) -> Result<()>
where
    C: Client,
    W: Write,
{
    let books = searcher.search(title).map_err(|err| {
        let message = error_message(&err);
        Report::new(err).wrap_err(message)
    })?;

    write_books(&books, format, out)
}

/// Search for each title from `next_title` until it returns `None`, writing the books found.
///
/// Failed searches are shown inline and the next title is read.
pub fn interactive<C, W, T>(
    searcher: &Searcher<C>,
    format: Format,
    out: &mut W,
    mut next_title: T,
) -> Result<()>
where
    C: Client,
    W: Write,
    T: FnMut() -> Result<Option<String>>,
{
    while let Some(title) = next_title()? {
        match searcher.search(&title) {
            Ok(books) => write_books(&books, format, out)?,
            Err(err) => {
                debug!("Search for '{title}' failed: {err}");
                eprintln!("{}", error_message(&err));
            }
        }
    }

    info!("No title entered - finishing");
    Ok(())
}

fn write_books<W: Write>(books: &[BookRecord], format: Format, out: &mut W) -> Result<()> {
    info!("Found {} book(s)", books.len());
    let rendered = render(books, format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .wrap_err("Cannot write the books found")
}
