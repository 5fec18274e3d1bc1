//! jdecode CLI - decode a user record from a JSON document
//!
//! Binary name: `jdecode`

use std::{io, process};

use clap::Parser;
use jdecode::cli::{self, setup, Args};

fn main() {
    let args = Args::parse();

    let config = match setup::load_config(&args, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {err:#}");
            }
            #[allow(clippy::exit)]
            process::exit(2);
        }
    };

    if let Err(err) = setup::init_tracing(config.log_level) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Warning: {err}");
        }
    }

    let result = cli::run(
        &args,
        &config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "failed to write output");
            2
        }
    };

    #[allow(clippy::exit)]
    process::exit(code);
}
