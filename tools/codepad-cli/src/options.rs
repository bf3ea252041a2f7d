//! Flag parsing shared by the file commands.

use std::path::{Path, PathBuf};

use codepad_highlight::{Language, Profile, Theme};

use crate::CliError;

/// Options for `lex`, `highlight`, `json` and `colors`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// First positional argument.
    pub path: Option<PathBuf>,
    /// Explicit `--language`; otherwise inferred from `path`.
    pub language: Option<Language>,
    pub profile: Profile,
    pub theme: Theme,
}

impl HighlightOptions {
    /// The language to highlight with: the flag, then the file extension,
    /// then JavaScript.
    pub fn resolved_language(&self) -> Language {
        self.language
            .or_else(|| self.path.as_deref().and_then(Language::from_path))
            .unwrap_or_default()
    }

    pub fn require_path(&self) -> Result<&Path, CliError> {
        self.path
            .as_deref()
            .ok_or_else(|| CliError::Usage("missing file path".to_string()))
    }
}

/// Parse command flags.
///
/// Accepts `--flag=value` and `--flag value`, and the same two forms for
/// `-l`. Unknown language names warn and fall back to JavaScript, like the
/// editor does.
pub fn parse_options(args: &[String]) -> Result<HighlightOptions, CliError> {
    let mut options = HighlightOptions::default();
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with('-') => (flag, Some(value)),
            _ => (arg, None),
        };

        match flag {
            "--language" | "-l" | "--profile" | "--theme" => {
                let value = match inline {
                    Some(value) => value,
                    None => {
                        i += 1;
                        args.get(i)
                            .map(String::as_str)
                            .ok_or_else(|| CliError::Usage(format!("missing value for {flag}")))?
                    }
                };
                match flag {
                    "--profile" => options.profile = value.parse()?,
                    "--theme" => options.theme = value.parse()?,
                    _ => options.language = Some(parse_language(value)),
                }
            }
            "--dark" => options.theme = Theme::from_is_dark(true),
            "--light" => options.theme = Theme::from_is_dark(false),
            _ if flag.len() > 1 && flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
            _ if options.path.is_none() => options.path = Some(PathBuf::from(arg)),
            _ => return Err(CliError::Usage(format!("unexpected argument '{arg}'"))),
        }
        i += 1;
    }

    Ok(options)
}

/// Resolve a language given by name or extension.
fn parse_language(value: &str) -> Language {
    let value = value.trim();
    Language::ALL
        .into_iter()
        .find(|language| language.name().eq_ignore_ascii_case(value))
        .or_else(|| Language::from_extension(value))
        .unwrap_or_else(|| {
            tracing::warn!(language = value, "unknown language");
            eprintln!("warning: unknown language '{value}', using javascript");
            Language::from_name(value)
        })
}

#[cfg(test)]
mod tests;
