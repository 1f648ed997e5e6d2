use clap::Parser;
use iengine::report::{Answer, Failure};
use iengine::{cli, decide, parse, Error};
use std::fs::File;
use std::io::Write;

/// Decide whether a knowledge base entails a query
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
struct Cli {
    /// Inference method: tt, fc, bc, or dpll
    method: String,

    #[command(flatten)]
    paths: cli::Paths,
}

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!("{}", Failure(&e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let problem = parse::parse_file(&cli.paths.file)?;
    let verdict = decide(&cli.method, &problem)?;

    if let Some(file) = &cli.paths.json {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string(&verdict)?)?;
    };

    cli.paths.output(Answer(&verdict))?;
    Ok(())
}
