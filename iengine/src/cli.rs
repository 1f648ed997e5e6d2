use clap::Args;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Args)]
pub struct Paths {
    /// Write the answer to given file instead of standard output
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write the verdict and its evidence in JSON format to given file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Path of the problem file
    pub file: PathBuf,
}

impl Paths {
    pub fn output(&self, out: impl Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, format!("{}\n", out)),
            None => writeln!(std::io::stdout(), "{}", out),
        }
    }
}
