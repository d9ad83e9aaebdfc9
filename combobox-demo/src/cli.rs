use std::path::PathBuf;

use clap::Parser;

/// Pick one option from a searchable dropdown and print its value.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file describing the options (defaults to the user config file)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_uses_default_config() {
        let cli = Cli::try_parse_from(["combobox-demo"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_path_positional() {
        let cli = Cli::try_parse_from(["combobox-demo", "frameworks.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("frameworks.json")));
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["combobox-demo", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["combobox-demo", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
