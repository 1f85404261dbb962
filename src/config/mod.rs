pub mod cli;
pub mod toml_config;

use crate::domain::model::Params;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "mulsave", version)]
#[command(about = "Multiply two integers, print the product and save it to <SAVE_NAME>.p")]
pub struct CliConfig {
    /// First multiplicand [default: 1]
    #[arg(long = "var_a", allow_negative_numbers = true)]
    pub var_a: Option<i64>,

    /// Second multiplicand [default: 2]
    #[arg(long = "var_b", allow_negative_numbers = true)]
    pub var_b: Option<i64>,

    /// Base name of the output file, written as <SAVE_NAME>.p
    #[arg(long = "save_name")]
    pub save_name: Option<String>,

    /// TOML file supplying defaults for the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_config_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// Flag > config file > built-in default. Fails only when no
    /// `save_name` is available from either source.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<Params> {
        let section = file.and_then(|f| f.params());

        let var_a = self
            .var_a
            .or_else(|| section.and_then(|p| p.var_a))
            .unwrap_or(Params::DEFAULT_VAR_A);
        let var_b = self
            .var_b
            .or_else(|| section.and_then(|p| p.var_b))
            .unwrap_or(Params::DEFAULT_VAR_B);
        let save_name = self
            .save_name
            .clone()
            .or_else(|| section.and_then(|p| p.save_name.clone()));

        Ok(Params {
            var_a,
            var_b,
            save_name: validate_required_field("save_name", &save_name)?.clone(),
        })
    }

    pub fn verbose(&self, file: Option<&TomlConfig>) -> bool {
        self.verbose || file.map(TomlConfig::verbose).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MulError;

    fn parse(args: &[&str]) -> std::result::Result<CliConfig, clap::Error> {
        CliConfig::try_parse_from(std::iter::once("mulsave").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_applied() {
        let cli = parse(&["--save_name", "out"]).unwrap();
        let params = cli.resolve(None).unwrap();
        assert_eq!(params, Params::new("out"));
        assert_eq!((params.var_a, params.var_b), (1, 2));
    }

    #[test]
    fn test_negative_values_accepted() {
        let cli = parse(&["--var_a", "-3", "--var_b=-5", "--save_name", "neg"]).unwrap();
        let params = cli.resolve(None).unwrap();
        assert_eq!((params.var_a, params.var_b), (-3, -5));
    }

    #[test]
    fn test_non_integer_is_usage_error() {
        let err = parse(&["--var_a", "x", "--save_name", "out"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_out_of_range_is_usage_error() {
        let err = parse(&["--var_b", "9223372036854775808", "--save_name", "out"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_kebab_case_flags_are_not_accepted() {
        assert!(parse(&["--save-name", "out"]).is_err());
    }

    #[test]
    fn test_missing_save_name() {
        let cli = parse(&["--var_a", "4"]).unwrap();
        match cli.resolve(None) {
            Err(MulError::MissingConfigError { field }) => assert_eq!(field, "save_name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = TomlConfig::from_toml_str(
            "[params]\nvar_a = 10\nvar_b = 20\nsave_name = \"file\"\n\n[logging]\nverbose = true\n",
        )
        .unwrap();

        let cli = parse(&["--var_b", "3"]).unwrap();
        let params = cli.resolve(Some(&file)).unwrap();

        assert_eq!(params.var_a, 10);
        assert_eq!(params.var_b, 3);
        assert_eq!(params.save_name, "file");
        assert!(cli.verbose(Some(&file)));
        assert!(!cli.verbose(None));
    }
}
