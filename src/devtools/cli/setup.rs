use clap::Parser;
use devtools::api::{Base64Request, UuidRequest};
use devtools::commands::base64::Mode;
use devtools::commands::uuid::{Entropy, UuidVersion};
use log::LevelFilter;
use std::path::PathBuf;

pub const BIN_NAME: &str = "devtools";

#[derive(Parser, Debug)]
#[command(name = "devtools", bin_name = "devtools", version)]
#[command(about = "Small developer utilities: base64 and UUIDs", long_about = None)]
#[command(override_usage = "devtools [global flags] <command> [flags]")]
pub struct Cli {
    /// Print full error diagnostics (same as setting DEBUG)
    #[arg(long)]
    pub debug: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,

    /// Command name or alias, followed by its flags
    #[arg(value_name = "COMMAND", num_args = 1.., trailing_var_arg = true)]
    pub command: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "base64", bin_name = "devtools base64")]
#[command(about = "Encode or decode unpadded base64", long_about = None)]
pub struct Base64Args {
    /// Encode input (default)
    #[arg(short, long, conflicts_with = "decode")]
    pub encode: bool,

    /// Decode input
    #[arg(short, long)]
    pub decode: bool,

    /// Input file
    #[arg(short, long, visible_alias = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input text
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file path. The result is printed to stdout either way
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Base64Args {
    /// `--encode` and `--decode` conflict, so at most one of them is set.
    pub fn mode(&self) -> Mode {
        match (self.encode, self.decode) {
            (_, true) => Mode::Decode,
            _ => Mode::Encode,
        }
    }
}

impl From<Base64Args> for Base64Request {
    fn from(args: Base64Args) -> Self {
        Base64Request {
            mode: args.mode(),
            text: args.text,
            input: args.input,
            output: args.output,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "uuid", bin_name = "devtools uuid")]
#[command(about = "Generate a UUID", long_about = None)]
pub struct UuidArgs {
    /// UUID version (-v4, -v7, --v4, --v7)
    #[arg(
        short = 'v',
        long = "version",
        alias = "uuid-version",
        value_enum,
        value_name = "VERSION",
        default_value_t = UuidVersion::V4
    )]
    pub version: UuidVersion,

    /// Use the operating system's cryptographic random source
    #[arg(short, long)]
    pub crypto: bool,

    /// Seed the fast random source for reproducible output
    #[arg(long, value_name = "N", conflicts_with = "crypto")]
    pub seed: Option<u64>,
}

impl From<UuidArgs> for UuidRequest {
    fn from(args: UuidArgs) -> Self {
        let entropy = if args.crypto {
            Entropy::Crypto
        } else {
            Entropy::Fast { seed: args.seed }
        };
        UuidRequest {
            version: args.version,
            entropy,
        }
    }
}

/// Multi-letter flag spellings a command accepts besides clap's own forms.
///
/// Users coming from Go-style tools write `-text=hello` or `-decode`, which
/// clap would read as the short `-t` with `ext=hello` attached.
pub struct FlagTable {
    /// Spelling (without dashes) and the argument it is rewritten to.
    pub rewrites: &'static [(&'static str, &'static str)],
    /// Spellings (without dashes) whose value is the next argument.
    pub takes_value: &'static [&'static str],
}

impl FlagTable {
    fn rewrite(&self, name: &str) -> Option<&'static str> {
        self.rewrites
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| *to)
    }
}

pub const BASE64_FLAGS: FlagTable = FlagTable {
    rewrites: &[
        ("encode", "--encode"),
        ("decode", "--decode"),
        ("input", "--input"),
        ("in", "--input"),
        ("text", "--text"),
        ("output", "--output"),
    ],
    takes_value: &["i", "t", "o", "input", "in", "text", "output"],
};

pub const UUID_FLAGS: FlagTable = FlagTable {
    rewrites: &[
        ("crypto", "--crypto"),
        ("seed", "--seed"),
        ("version", "--version"),
        ("uuid-version", "--version"),
        ("v4", "-v4"),
        ("v7", "-v7"),
    ],
    takes_value: &["v", "version", "uuid-version", "seed"],
};

/// Builds the argv clap sees for a command: its name followed by the
/// arguments, with table spellings rewritten to their canonical form.
///
/// Values of flags that take one are passed through untouched, and so is
/// everything after a bare `--`.
pub fn command_argv(name: &str, args: &[String], flags: &FlagTable) -> Vec<String> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(name.to_string());

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if arg == "--" {
            argv.push(arg.clone());
            argv.extend(rest.by_ref().cloned());
            break;
        }

        let Some(body) = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|body| !body.is_empty())
        else {
            argv.push(arg.clone());
            continue;
        };

        let (flag, value) = match body.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (body, None),
        };

        match (flags.rewrite(flag), value) {
            (Some(canonical), Some(value)) => argv.push(format!("{}={}", canonical, value)),
            (Some(canonical), None) => argv.push(canonical.to_string()),
            (None, _) => argv.push(arg.clone()),
        }

        if value.is_none() && flags.takes_value.iter().any(|name| *name == flag) {
            if let Some(next) = rest.next() {
                argv.push(next.clone());
            }
        }
    }
    argv
}
