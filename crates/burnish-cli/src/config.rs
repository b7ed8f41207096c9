//! Configuration loading for the `burnish` binary.
//!
//! Leading configuration flags are split off and handed to `ortho_config`;
//! everything from the first other token onwards is parsed by `clap`.

use std::ffi::{OsStr, OsString};

use burnish_config::{CONFIG_CLI_FLAGS, Config};
use ortho_config::OrthoConfig;

use crate::errors::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration from the leading configuration flags.
    ///
    /// Configuration flags appearing after the subcommand are not seen here
    /// and will be rejected by the subcommand parser.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Stop,
}

fn classify(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    let Some(rest) = text.strip_prefix("--") else {
        return FlagAction::Stop;
    };
    let (flag, has_inline_value) = rest
        .split_once('=')
        .map_or((rest, false), |(flag, _)| (flag, true));
    if CONFIG_CLI_FLAGS
        .iter()
        .any(|known| known.strip_prefix("--") == Some(flag))
    {
        FlagAction::Include {
            needs_value: !has_inline_value,
        }
    } else {
        FlagAction::Stop
    }
}

/// Arguments divided between the configuration loader and `clap`.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_arguments: Vec<OsString>,
}

/// Splits leading configuration flags from the command.
///
/// Both halves keep the program name as their first element.
pub(crate) fn split_config_arguments(args: &[OsString]) -> ArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ArgumentSplit::default();
    };
    let mut split = ArgumentSplit {
        config_arguments: vec![program.clone()],
        command_arguments: vec![program.clone()],
    };

    let mut remaining = rest.iter();
    while let Some(argument) = remaining.next() {
        match classify(argument) {
            FlagAction::Include { needs_value } => {
                split.config_arguments.push(argument.clone());
                if needs_value && let Some(value) = remaining.next() {
                    split.config_arguments.push(value.clone());
                }
            }
            FlagAction::Stop => {
                split.command_arguments.push(argument.clone());
                split.command_arguments.extend(remaining.cloned());
                break;
            }
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case("--log-filter=debug", FlagAction::Include { needs_value: false })]
    #[case("--log-filter", FlagAction::Include { needs_value: true })]
    #[case("--disabled-rules", FlagAction::Include { needs_value: true })]
    #[case("fix", FlagAction::Stop)]
    #[case("--diff", FlagAction::Stop)]
    #[case("--unknown", FlagAction::Stop)]
    fn classifies_flags(#[case] argument: &str, #[case] expected: FlagAction) {
        assert_eq!(classify(OsStr::new(argument)), expected);
    }

    #[test]
    fn leading_flags_go_to_the_loader() {
        let split = split_config_arguments(&os(&[
            "burnish",
            "--max-passes",
            "2",
            "--log-format=json",
            "fix",
            "--diff",
            "src",
        ]));
        assert_eq!(
            split.config_arguments,
            os(&["burnish", "--max-passes", "2", "--log-format=json"])
        );
        assert_eq!(
            split.command_arguments,
            os(&["burnish", "fix", "--diff", "src"])
        );
    }

    #[test]
    fn flags_after_the_subcommand_stay_with_the_command() {
        let split = split_config_arguments(&os(&["burnish", "check", "--max-passes", "2"]));
        assert_eq!(split.config_arguments, os(&["burnish"]));
        assert_eq!(
            split.command_arguments,
            os(&["burnish", "check", "--max-passes", "2"])
        );
    }

    #[test]
    fn empty_arguments_split_to_nothing() {
        assert_eq!(split_config_arguments(&[]), ArgumentSplit::default());
    }
}
