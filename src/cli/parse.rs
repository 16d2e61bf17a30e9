use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue("--length".into()))?;
                flags.length = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.clone()))?,
                );
            }
            "-n" | "--number" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue("--number".into()))?;
                flags.number = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.clone()))?,
                );
            }
            "-o" | "--output" => {
                // Path is optional; bare -o means the default file.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(crate::file_io::DEFAULT_OUTPUT_PATH.to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("entropass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "20", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-special", "--no-upper"])).unwrap();
        assert!(flags.no_special);
        assert!(flags.no_upper);
        assert!(!flags.no_lower);
        assert!(!flags.no_digits);
    }

    #[test]
    fn bare_output_defaults_path() {
        let flags = parse(&args(&["-o"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("passwords.txt"));

        let flags = parse(&args(&["-o", "vault.txt"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("vault.txt"));
    }

    #[test]
    fn output_does_not_swallow_following_flag() {
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("passwords.txt"));
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_bad_number() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".into()))
        );
        assert_eq!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue("--number".into()))
        );
    }

    #[test]
    fn rejects_unknown_argument() {
        assert_eq!(
            parse(&args(&["--wat"])),
            Err(ParseError::UnknownArg("--wat".into()))
        );
    }
}
