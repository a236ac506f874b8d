use super::render::{render_command_list, render_failure};
use super::setup::{command_argv, Base64Args, Cli, UuidArgs, BASE64_FLAGS, UUID_FLAGS};
use clap::{CommandFactory, FromArgMatches, Parser};
use devtools::api::{Base64Request, DevTools, UuidRequest};
use devtools::cancel::CancelToken;
use devtools::clipboard::SystemClipboard;
use devtools::config::{Settings, LOG_ENV};
use devtools::error::Result;
use devtools::input::ProcessStdin;
use devtools::registry::{CommandEntry, Registry};
use std::io::{self, StdoutLock};
use std::process::ExitCode;

/// Exit status for every failure, whether reported by clap or by a command.
const FAILURE_EXIT_CODE: u8 = 2;

/// A command handler receives the arguments that follow its name.
pub type Handler = fn(&[String], CancelToken) -> Result<()>;

type ProcessTools = DevTools<ProcessStdin, SystemClipboard, StdoutLock<'static>>;

pub fn build_registry() -> Result<Registry<Handler>> {
    Registry::<Handler>::new()
        .with(CommandEntry {
            name: "base64",
            alias: "b64",
            about: "Encode or decode unpadded base64",
            handler: handle_base64,
        })?
        .with(CommandEntry {
            name: "uuid",
            alias: "u",
            about: "Generate a v4 or v7 UUID",
            handler: handle_uuid,
        })
}

pub fn run() -> ExitCode {
    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprint!(
                "{}",
                render_failure(&e, &Settings::default(), None::<&Registry<Handler>>)
            );
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    let cli = parse_global_flags(&registry);
    let settings = Settings::load(cli.debug, cli.log_level);
    init_logging(&settings);
    let cancel = CancelToken::from_signals();

    match dispatch(&registry, &cli.command, cancel) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprint!("{}", render_failure(&e, &settings, Some(&registry)));
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn parse_global_flags(registry: &Registry<Handler>) -> Cli {
    let matches = Cli::command()
        .after_help(render_command_list(registry))
        .get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_logging(settings: &Settings) {
    let _ = env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_env(env_logger::Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .try_init();
}

fn dispatch(registry: &Registry<Handler>, args: &[String], cancel: CancelToken) -> Result<()> {
    let (entry, rest) = registry.dispatch(args)?;
    log::debug!("dispatching to {} with {:?}", entry.name, rest);
    (entry.handler)(rest, cancel)
}

fn process_tools() -> ProcessTools {
    DevTools::new(ProcessStdin, SystemClipboard, io::stdout().lock())
}

fn handle_base64(args: &[String], cancel: CancelToken) -> Result<()> {
    let args = Base64Args::parse_from(command_argv("base64", args, &BASE64_FLAGS));
    let request = Base64Request::from(args);
    process_tools().base64(&request, cancel)
}

fn handle_uuid(args: &[String], cancel: CancelToken) -> Result<()> {
    let args = UuidArgs::parse_from(command_argv("uuid", args, &UUID_FLAGS));
    let request = UuidRequest::from(args);
    process_tools().uuid(&request, cancel)
}
