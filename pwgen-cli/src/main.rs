//! Command-line front-end for the password generator.
//!
//! Drives the same form state as the desktop UI: the flags fill in the
//! form, the form is validated, and each requested password is printed
//! on its own line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pwgen_core::Error;
use pwgen_core::config::Settings;
use pwgen_core::model::charset::CharClass;
use pwgen_core::model::form::FormState;
use pwgen_core::model::generator::Generator;

#[derive(Parser, Debug)]
#[command(
    name = "pwgen-cli",
    version,
    about = "Generate random passwords from selected character classes",
    long_about = r#"
Generates random passwords of 4 to 16 characters.

Lower-case letters are included by default; add upper-case letters,
digits and symbols with the matching flags, or drop lower-case with
--no-lower. At least one class must remain selected.

Typical usage:
  pwgen-cli --length 12 --upper --digits
  pwgen-cli -l 8 --symbols --count 5
"#
)]
struct Cli {
    /// Length of the generated password (4 to 16)
    ///
    /// Defaults to `form.default_length` from the settings file.
    #[arg(short, long)]
    length: Option<String>,

    /// Include upper-case letters (A–Z)
    #[arg(short, long)]
    upper: bool,

    /// Include digits (0–9)
    #[arg(short, long)]
    digits: bool,

    /// Include symbols (e.g. !@#$%)
    #[arg(short, long)]
    symbols: bool,

    /// Exclude lower-case letters (a–z)
    #[arg(long)]
    no_lower: bool,

    /// Number of passwords to print
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Settings file (defaults to $PWGEN_CONFIG, then ./pwgen.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Fills a form the way a user would on the desktop screen.
    fn to_form(&self, settings: &Settings) -> FormState {
        let length = self
            .length
            .clone()
            .unwrap_or_else(|| settings.initial_length_input());

        let mut form = FormState::new(length);
        form.set_class(CharClass::Lower, !self.no_lower);
        form.set_class(CharClass::Upper, self.upper);
        form.set_class(CharClass::Digit, self.digits);
        form.set_class(CharClass::Symbol, self.symbols);
        form
    }
}

fn run(cli: &Cli) -> Result<Vec<String>, Error> {
    let settings = Settings::load(cli.config.as_deref())?;
    let mut form = cli.to_form(&settings);
    let mut generator = Generator::new();

    (0..cli.count)
        .map(|_| form.submit(&mut generator).map(|password| password.to_string()))
        .collect()
}

/// Prints the outcome of `run` and maps it to the process status.
///
/// Validation failures exit with 2, anything else that fails with 1.
fn report(result: Result<Vec<String>, Error>) -> ExitCode {
    match result {
        Ok(passwords) => {
            for password in passwords {
                println!("{password}");
            }
            ExitCode::SUCCESS
        }
        Err(Error::Validation(errors)) => {
            for err in errors {
                eprintln!("{err}");
            }
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    report(run(&cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwgen_core::model::validation::{Field, FieldError};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pwgen-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_fill_the_form() {
        let cli = parse(&["-l", "6", "--digits", "--no-lower"]);
        let form = cli.to_form(&Settings::default());
        assert_eq!(form.length_input(), "6");
        assert!(form.is_enabled(CharClass::Digit));
        assert!(!form.is_enabled(CharClass::Lower));
        assert!(form.is_valid());
    }

    #[test]
    fn missing_length_falls_back_to_settings() {
        let settings = Settings::from_toml_str("[form]\ndefault_length = 10\n").unwrap();
        let form = parse(&[]).to_form(&settings);
        assert_eq!(form.length_input(), "10");
    }

    #[test]
    fn zero_count_is_rejected() {
        let args = ["pwgen-cli", "--count", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn run_prints_one_password_per_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("absent.toml");
        let cli = parse(&["-l", "5", "--upper", "--count", "3", "--config", config.to_str().unwrap()]);

        let passwords = run(&cli).unwrap();
        assert_eq!(passwords.len(), 3);
        assert!(passwords.iter().all(|p| p.chars().count() == 5));
    }

    #[test]
    fn exit_status_follows_the_outcome() {
        assert_eq!(report(Ok(vec!["abcd".to_owned()])), ExitCode::SUCCESS);

        let validation = Error::Validation(vec![FieldError::new(Field::Length, "length is required!")]);
        assert_eq!(report(Err(validation)), ExitCode::from(2));

        let config = Settings::from_toml_str("[window").unwrap_err();
        assert!(matches!(config, Error::Config(_)));
        assert_eq!(report(Err(config)), ExitCode::FAILURE);
    }

    #[test]
    fn no_class_is_a_validation_error() {
        let cli = parse(&["-l", "8", "--no-lower"]);
        let mut form = cli.to_form(&Settings::default());
        let err = form.submit(&mut Generator::new()).unwrap_err();
        assert!(matches!(err, Error::Validation(ref errors) if errors.len() == 1));
    }
}
