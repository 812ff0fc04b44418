use std::io::{self, Write};

use anyhow::{Context, Result};

use defparser::config::{Config, usage};
use defparser::error::{EXIT_LOAD_FAILURE, EXIT_OUTPUT_FAILURE, EXIT_USAGE};
use defparser::{ParseResult, parser, validate};

fn init_logging(config: &Config) {
    // RUST_LOG wins over --log-level when set.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_string()),
    )
    .init();
}

/// Print the parse result as pretty JSON on stdout
fn dump(result: &ParseResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serializing parse result")?;
    writeln!(io::stdout().lock(), "{}", json).context("writing parse result")?;
    Ok(())
}

fn main() {
    // Argument errors must not collide with the 0..=3 validation codes.
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    };
    init_logging(&config);

    let Some(path) = config.path.as_deref() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "defparser".to_string());
        print!("{}", usage(&program));
        return;
    };

    for warning in &config.warnings {
        eprintln!("{}", warning);
    }

    log::info!("Checking {}", path.display());
    let result = match parser::parse_file(path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(EXIT_LOAD_FAILURE);
        }
    };

    if config.dump {
        if let Err(e) = dump(&result) {
            eprintln!("error: {:#}", e);
            std::process::exit(EXIT_OUTPUT_FAILURE);
        }
    }

    std::process::exit(validate(&result));
}
