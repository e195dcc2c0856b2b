// porter-cli: shared utilities for CLI tools.

use std::process;

use porter_core::{DoubleConsonantRule, InputPolicy};
use porter_en::handle::StemmerHandle;
use porter_en::StemmerOptions;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a default stop-word file.
pub const STOP_WORDS_ENV: &str = "PORTER_STOP_WORDS";

/// Environment variable holding the log filter (e.g. `debug`, `porter_en=trace`).
pub const LOG_ENV: &str = "PORTER_LOG";

/// Options shared by every tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Stop-word file from `-s`/`--stop-words`.
    pub stop_words: Option<String>,
    /// `--lowercase`: lowercase input instead of rejecting uppercase letters.
    pub lowercase: bool,
    /// `--same-letter-doubles`: only identical letters count as a double consonant.
    pub same_letter_doubles: bool,
}

impl CommonArgs {
    pub fn options(&self) -> StemmerOptions {
        StemmerOptions {
            input_policy: if self.lowercase {
                InputPolicy::Lowercase
            } else {
                InputPolicy::Strict
            },
            double_consonant: if self.same_letter_doubles {
                DoubleConsonantRule::SameLetter
            } else {
                DoubleConsonantRule::ByClass
            },
        }
    }
}

/// Install a stderr subscriber filtered by `PORTER_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse the common options out of the command line.
///
/// Returns `(common, remaining_args)`. A missing value for `-s` is an error.
pub fn parse_common_args(args: &[String]) -> Result<(CommonArgs, Vec<String>), String> {
    let mut common = CommonArgs::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--stop-words=") {
            common.stop_words = Some(val.to_string());
        } else if arg == "--stop-words" || arg == "-s" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            common.stop_words = Some(val.clone());
        } else if arg == "--lowercase" {
            common.lowercase = true;
        } else if arg == "--same-letter-doubles" {
            common.same_letter_doubles = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((common, remaining))
}

/// Build a handle from the common options.
///
/// The stop-word file comes from the command line, or else from
/// `PORTER_STOP_WORDS`; without either no stop words are dropped.
pub fn load_handle(common: &CommonArgs) -> Result<StemmerHandle, String> {
    let mut handle = StemmerHandle::new(common.options());

    let stop_words = common
        .stop_words
        .clone()
        .or_else(|| std::env::var(STOP_WORDS_ENV).ok().filter(|p| !p.is_empty()));
    if let Some(path) = stop_words {
        handle.load_stop_words(&path).map_err(|e| e.to_string())?;
    }

    Ok(handle)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Help text for the common options.
pub const COMMON_OPTIONS_HELP: &str = "\
  -s, --stop-words PATH     Drop the words listed in PATH (one per line)
                            (default: $PORTER_STOP_WORDS)
  --lowercase               Lowercase input instead of rejecting uppercase
  --same-letter-doubles     Only identical letters form a double consonant
  -h, --help                Print this help

Logging is controlled by $PORTER_LOG (e.g. PORTER_LOG=debug).";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_all_options() {
        let (common, rest) = parse_common_args(&args(&[
            "--lowercase",
            "-s",
            "stop.txt",
            "--words",
            "--same-letter-doubles",
        ]))
        .unwrap();
        assert_eq!(common.stop_words.as_deref(), Some("stop.txt"));
        assert!(common.lowercase);
        assert!(common.same_letter_doubles);
        assert_eq!(rest, vec!["--words"]);
    }

    #[test]
    fn parse_equals_form() {
        let (common, rest) = parse_common_args(&args(&["--stop-words=en.txt"])).unwrap();
        assert_eq!(common.stop_words.as_deref(), Some("en.txt"));
        assert!(rest.is_empty());
    }

    #[test]
    fn missing_value_is_error() {
        let err = parse_common_args(&args(&["-s"])).unwrap_err();
        assert_eq!(err, "-s requires a value");
    }

    #[test]
    fn options_mapping() {
        assert_eq!(CommonArgs::default().options(), StemmerOptions::default());
        let common = CommonArgs {
            lowercase: true,
            same_letter_doubles: true,
            ..CommonArgs::default()
        };
        let options = common.options();
        assert_eq!(options.input_policy, InputPolicy::Lowercase);
        assert_eq!(options.double_consonant, DoubleConsonantRule::SameLetter);
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["--words"])));
    }
}
