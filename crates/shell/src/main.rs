use std::{
    env,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use abacus_shell::{ConfigError, ShellConfig, run};

/// Setting this variable to any value enables iteration tracing on stderr.
const TRACE_VAR: &str = "ABACUS_TRACE";

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("abacus: {error}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match run(&config, stdin.lock(), &mut stdout, &mut stderr) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(error) => {
            let _ = stdout.flush();
            eprintln!("abacus: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the config file named by the first argument, if any.
fn load_config() -> Result<ShellConfig, ConfigError> {
    let mut config = match env::args_os().nth(1) {
        Some(path) => ShellConfig::load(Path::new(&path))?,
        None => ShellConfig::default(),
    };

    if env::var_os(TRACE_VAR).is_some() {
        config.trace = true;
    }

    Ok(config)
}
