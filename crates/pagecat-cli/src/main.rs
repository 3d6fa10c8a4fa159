mod cli;

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use pagecat::{ExtractConfig, PageError, Source};

use cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(code) = run(&cli) {
        std::process::exit(code);
    }
}

/// Process every input source in order; the first failure aborts the run.
fn run(cli: &Cli) -> Result<(), i32> {
    let config = cli.to_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        return cat_stdin(&mut out, &config);
    }
    for path in &cli.files {
        if path.as_os_str() == "-" {
            cat_stdin(&mut out, &config)?;
        } else {
            cat_file(&mut out, path, &config)?;
        }
    }
    Ok(())
}

fn cat_file(out: &mut impl Write, path: &Path, config: &ExtractConfig) -> Result<(), i32> {
    let source = Source::from_path(path).map_err(|e| report(path.display(), e))?;
    source.extract(out, config).map_err(|e| report(path.display(), e))
}

fn cat_stdin(out: &mut impl Write, config: &ExtractConfig) -> Result<(), i32> {
    let source = Source::from_reader(io::stdin().lock()).map_err(|e| report("stdin", e))?;
    source.extract(out, config).map_err(|e| report("stdin", e))
}

/// Print a single diagnostic line to stderr and return the exit code.
fn report(name: impl Display, err: PageError) -> i32 {
    eprintln!("Error: {name}: {err}");
    1
}
