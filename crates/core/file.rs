use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use log::{info, trace};

/// Where rendered books are written, stdout unless an output file was given.
pub fn open_output(file_name: Option<PathBuf>) -> Result<Box<dyn Write>> {
    if let Some(path) = file_name {
        trace!("opening {} to write the books found", path.display());
        create_or_truncate(&path).map(|file| Box::new(BufWriter::new(file)) as Box<dyn Write>)
    } else {
        trace!("'output' option not used - writing to stdout");
        Ok(Box::new(io::stdout()))
    }
}

#[inline]
fn create_or_truncate(path: &Path) -> Result<File> {
    if path.exists() {
        info!("Overwriting the existing file `{}`", path.display());
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open the '{}' file for writing.", path.display()))
}
