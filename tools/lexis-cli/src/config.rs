//! Command-line configuration.

use std::io::Read;
use std::path::PathBuf;

/// Where the input text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Stdin,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub input: Input,
    /// Print each token's text alongside its span.
    pub show_text: bool,
    /// Print per-category token counts after the stream.
    pub summary: bool,
    pub help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            input: Input::Stdin,
            show_text: true,
            summary: false,
            help: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}': only one input file is accepted")]
    ExtraInput(String),
}

impl CliConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CliConfig::default();
        let mut path = None;

        for arg in args {
            match arg.as_str() {
                "--no-text" => config.show_text = false,
                "--summary" | "-s" => config.summary = true,
                "--help" | "-h" => config.help = true,
                "-" => config.input = Input::Stdin,
                option if option.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ if path.is_some() => return Err(ConfigError::ExtraInput(arg)),
                _ => path = Some(PathBuf::from(arg)),
            }
        }

        if let Some(path) = path {
            config.input = Input::Path(path);
        }
        Ok(config)
    }

    /// Read the whole input as UTF-8 text.
    pub fn read_input(&self) -> Result<String, String> {
        match &self.input {
            Input::Path(path) => std::fs::read_to_string(path).map_err(|e| {
                let path = path.display();
                match e.kind() {
                    std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                    std::io::ErrorKind::PermissionDenied => {
                        format!("permission denied reading '{path}'")
                    }
                    std::io::ErrorKind::InvalidData => {
                        format!("'{path}' contains invalid UTF-8 data")
                    }
                    _ => format!("error reading '{path}': {e}"),
                }
            }),
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| format!("error reading standard input: {e}"))?;
                Ok(text)
            }
        }
    }
}
