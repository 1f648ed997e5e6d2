pub mod cli;
mod error;
pub mod parse;
pub mod report;

pub use error::{Error, Kind};

use entail::{Method, Verdict};
use log::info;

/// Decide a problem with the inference method of the given name.
pub fn decide(method: &str, problem: &parse::Problem) -> Result<Verdict, Error> {
    let method: Method = method.parse()?;
    info!("method: {}", method);
    Ok(method.entails(&problem.kb, &problem.query)?)
}
