use super::setup::{Cli, BIN_NAME};
use clap::CommandFactory;
use colored::*;
use devtools::config::Settings;
use devtools::error::DevToolsError;
use devtools::registry::Registry;
use std::error::Error;

const FLAG_WIDTH: usize = 24;

/// Formats a failure for stderr: the message, then the usage listing when a
/// registry is available.
///
/// Debug settings add the cause chain and the error's debug structure.
pub fn render_failure<H>(
    err: &DevToolsError,
    settings: &Settings,
    registry: Option<&Registry<H>>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} {}\n", "error:".red().bold(), err));

    if settings.debug {
        output.push_str(&render_diagnostics(err));
    }

    if let Some(registry) = registry {
        output.push_str(&render_usage(registry));
    }

    output
}

fn render_diagnostics(err: &DevToolsError) -> String {
    let mut output = String::new();

    let mut source = err.source();
    if source.is_some() {
        output.push_str("\nCaused by:\n");
    }
    let mut depth = 0;
    while let Some(cause) = source {
        output.push_str(&format!("  {}: {}\n", depth, cause));
        source = cause.source();
        depth += 1;
    }

    output.push_str(&format!("\nDetails:\n{:#?}\n", err));
    output
}

pub fn render_usage<H>(registry: &Registry<H>) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Usage:".bold()));
    output.push_str(&format!("  {} [global flags] <command> [flags]\n", BIN_NAME));

    output.push_str(&format!("\n{}\n", "Global flags:".bold()));
    output.push_str(&render_global_flags());

    output.push('\n');
    output.push_str(&render_command_list(registry));
    output
}

/// Lists registered commands with their aliases, e.g. `base64 (or b64)`.
pub fn render_command_list<H>(registry: &Registry<H>) -> String {
    let mut output = String::new();
    output.push_str("Commands:\n");
    for entry in registry.entries() {
        let names = format!("{} (or {})", entry.name, entry.alias);
        output.push_str(&format!("  {:<width$} {}\n", names, entry.about, width = FLAG_WIDTH));
    }
    output.push_str(&format!(
        "\nRun '{} <command> -h' for details.\n",
        BIN_NAME
    ));
    output
}

fn render_global_flags() -> String {
    let cmd = Cli::command();
    let mut output = String::new();

    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        let mut flag = match (arg.get_short(), arg.get_long()) {
            (Some(short), Some(long)) => format!("-{}, --{}", short, long),
            (None, Some(long)) => format!("--{}", long),
            (Some(short), None) => format!("-{}", short),
            (None, None) => continue,
        };
        if let Some(names) = arg.get_value_names() {
            for name in names {
                flag.push_str(&format!(" <{}>", name));
            }
        }
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<width$} {}\n", flag, help, width = FLAG_WIDTH));
    }

    output.push_str(&format!("  {:<width$} {}\n", "-h, --help", "Print help", width = FLAG_WIDTH));
    output.push_str(&format!(
        "  {:<width$} {}\n",
        "-V, --version",
        "Print version",
        width = FLAG_WIDTH
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtools::registry::CommandEntry;
    use std::io;

    fn registry() -> Registry<()> {
        Registry::new()
            .with(CommandEntry {
                name: "base64",
                alias: "b64",
                about: "Encode or decode unpadded base64",
                handler: (),
            })
            .unwrap()
    }

    #[test]
    fn test_failure_without_debug_is_short() {
        let err = DevToolsError::UnknownCommand("foo".to_string());
        let output = render_failure(&err, &Settings::default(), Some(&registry()));

        assert!(output.contains("foo is unknown command"));
        assert!(output.contains("Usage:"));
        assert!(output.contains("base64 (or b64)"));
        assert!(output.contains("Run 'devtools <command> -h' for details."));
        assert!(!output.contains("Details:"));
    }

    #[test]
    fn test_failure_with_debug_shows_cause_chain() {
        let err = DevToolsError::ReadStdin(io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone"));
        let settings = Settings {
            debug: true,
            ..Settings::default()
        };

        let output = render_failure(&err, &settings, None::<&Registry<()>>);

        assert!(output.contains("failed to read text from stdin"));
        assert!(output.contains("Caused by:"));
        assert!(output.contains("0: pipe gone"));
        assert!(output.contains("ReadStdin"));
        assert!(!output.contains("Usage:"));
    }

    #[test]
    fn test_global_flags_are_listed() {
        let flags = render_global_flags();
        assert!(flags.contains("--debug"));
        assert!(flags.contains("--log-level <LEVEL>"));
        assert!(!flags.contains("COMMAND"));
    }
}
