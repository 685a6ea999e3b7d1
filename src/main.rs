// src/main.rs

use screenwatch::cli::{self, CliAction};
use screenwatch::config::Settings;
use screenwatch::errors::ScreenwatchError;
use screenwatch::{bindings_from_args, logging, run};

fn main() {
    let program = cli::program_name();
    if let Err(err) = run_main(&program) {
        if err.is_usage_error() {
            eprintln!("{err}");
            cli::print_help(&program);
        } else {
            eprintln!("{program} error: {err}");
        }
        std::process::exit(1);
    }
}

fn run_main(program: &str) -> Result<(), ScreenwatchError> {
    let tokens = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let args = match cli::parse_args(tokens)? {
        CliAction::Run(args) => args,
        CliAction::Help => {
            cli::print_help(program);
            return Ok(());
        }
        CliAction::Version => {
            cli::print_version(program);
            return Ok(());
        }
    };

    let bindings = bindings_from_args(&args)?;
    let settings = Settings::from_env();
    logging::init_logging(settings.log_level(args.log_level))?;

    run(bindings, &settings)
}
