mod error;
mod icon;
mod models;
mod utils;

use env_logger::Env;
use icon::generate_icons;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    match generate_icons(Path::new(".")) {
        Ok(written) => {
            log::debug!("{} icons written", written.len());
            println!("All icons generated successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("icon generation failed");
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_is_info() {
        let logger = env_logger::Builder::new()
            .parse_filters(DEFAULT_LOG_FILTER)
            .build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }
}
