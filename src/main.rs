// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use swipeable_element::app::{self, paths, Flags};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

const HELP: &str = "\
swipeable_element

USAGE:
  swipeable_element [OPTIONS]

OPTIONS:
  --lang <id>           UI language (e.g. en-US, fr)
  --config-dir <dir>    Directory holding settings.toml
  --loop-ms <n>         Idle-loop length in milliseconds
  --log-level <filter>  Log filter when RUST_LOG is not set [default: info]
  -h, --help            Print this help
";

struct Args {
    flags: Flags,
    log_level: String,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        loop_ms: args.opt_value_from_str("--loop-ms")?,
    };
    let log_level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: unused arguments: {rest:?}");
    }

    Ok(Some(Args { flags, log_level }))
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    setup_logging(&args.log_level);
    paths::init_cli_overrides(args.flags.config_dir.clone());

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
