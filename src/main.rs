use std::process::ExitCode;

use matrix_rain::app::run::run;
use matrix_rain::config::{resolve_config_path, CliOverrides, RainConfig};

mod logging;

fn main() -> ExitCode {
    let log_guard = logging::init();

    let overrides = CliOverrides::parse(std::env::args().skip(1));
    let mut config = match resolve_config_path(overrides.config.as_deref()) {
        Some(path) => match RainConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "failed to load config");
                eprintln!("matrix-rain: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::warn!("no config location available, using defaults");
            RainConfig::default()
        }
    };
    config.apply(&overrides);
    if let Err(err) = config.validate() {
        eprintln!("matrix-rain: {err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            tracing::error!(error = %err, "terminal error");
            eprintln!("matrix-rain: {err}");
            if let Some(guard) = log_guard.as_ref() {
                eprintln!("logs: {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}
