// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::config::paths;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toasts - toast notification demo

USAGE:
    iced_toasts [OPTIONS]

OPTIONS:
    --lang <ID>          Interface language (e.g. en-US, fr)
    --config-dir <PATH>  Directory holding settings.toml
    -h, --help           Print this help

ENVIRONMENT:
    RUST_LOG                 Log filter (default: iced_toasts=info)
    ICED_TOASTS_CONFIG_DIR   Config directory when --config-dir is absent
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toasts=info")),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

/// Parses the command line; `Ok(None)` means help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}
