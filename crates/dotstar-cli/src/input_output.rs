use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// The file a path flag names; `None` for the standard stream.
///
/// An absent flag and `-` both mean the standard stream.
fn file_path(flag: &Option<String>) -> Option<&str> {
    flag.as_deref().filter(|path| *path != "-")
}

/// Where `grep` reads its lines from.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// File to search; stdin when absent or "-".
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open the line source, buffered.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Where `grep` writes the selected lines.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// File to write selected lines to; stdout when absent or "-".
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open the line sink, buffered; callers flush when done.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
