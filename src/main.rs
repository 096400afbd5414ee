// SPDX-License-Identifier: MPL-2.0
use panel_stack::app::{self, Flags};
use panel_stack::Axis;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "panel_stack=info";

const HELP: &str = "\
panel_stack - animated panel stack demo

USAGE:
    panel_stack [OPTIONS]

OPTIONS:
    --axis <vertical|horizontal>  Slide axis (overrides settings.toml)
    --panels <N>                  Number of sample panels [default: 5]
    --config-dir <DIR>            Directory containing settings.toml
    --log <FILTER>                Log filter directive [default: panel_stack=info]
    -h, --help                    Print this help
";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive: Directive = directive.parse().unwrap_or_else(|err| {
        eprintln!("invalid --log directive '{directive}': {err}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        axis: args.opt_value_from_fn("--axis", str::parse::<Axis>)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        panels: args.opt_value_from_str("--panels")?,
    };
    let log = args.opt_value_from_str("--log")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok((flags, log))
}

fn main() -> iced::Result {
    let (flags, log) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging(log.as_deref());
    tracing::info!("panel_stack v{} starting", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
