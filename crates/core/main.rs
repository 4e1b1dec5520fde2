#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

mod app;
mod file;
mod interact;
mod render;

use bookfind::{Provider, Searcher, DEFAULT_DISPLAY_CAP};
use render::Format;

use clap::{Args, Parser};
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        query,
        provider,
        key,
        limit,
        all,
        format,
        output,
        global_opts: GlobalOpts { verbosity, quiet },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let cap = if all { None } else { Some(limit) };
    trace!("Using {provider} with a display cap of {cap:?}");

    let searcher = Searcher::new(provider).credential(key).display_cap(cap);
    let mut out = file::open_output(output)?;

    if query.is_empty() {
        if io::stdin().is_terminal() {
            trace!("No title given - starting interactive mode");
            println!("Search {provider} by title, enter an empty line to quit");
            app::interactive(&searcher, format, &mut out, interact::user_input_title)
        } else {
            trace!("No title given and stdin is not a terminal - reading titles from stdin");
            let mut stdin = io::stdin().lock();
            app::interactive(&searcher, format, &mut out, || {
                interact::read_line_title(&mut stdin)
            })
        }
    } else {
        app::search_once(&searcher, &query.join(" "), format, &mut out)
    }
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfind")]
#[clap(about = "Search public book catalogs by title from the terminal")]
#[clap(version, author)]
struct Cli {
    /// The title to search for
    ///
    /// When no title is given the program prompts for titles until an empty line is entered,
    /// or reads one title per line when stdin is not a terminal.
    query: Vec<String>,

    /// The book catalog to search, either `google` or `openlibrary`
    #[clap(short, long, default_value = "google")]
    provider: Provider,

    /// API key for Google Books
    #[clap(short, long, env = "GOOGLE_BOOKS_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// The maximum number of books shown for each search
    #[clap(short = 'n', long, default_value_t = DEFAULT_DISPLAY_CAP)]
    limit: usize,

    /// Show every book returned by the catalog
    #[clap(long, conflicts_with = "limit")]
    all: bool,

    /// How the books are rendered, either `markdown` or `json`
    #[clap(long, default_value = "markdown")]
    format: Format,

    /// Write the books to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only errors are logged, regardless of verbosity.
    #[clap(short, long)]
    quiet: bool,
}
