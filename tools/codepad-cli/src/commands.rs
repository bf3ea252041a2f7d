//! `codepad` subcommands.
//!
//! Each command reads its input, renders to a `String`, and prints it. The
//! render functions are separate so they can be tested without I/O.

use std::fmt::Write;
use std::io::Read;
use std::path::Path;

use codepad_highlight::{color_for, highlight, tokenize, Language, Profile, Theme, TokenKind};

use crate::{ansi, CliError, HighlightOptions};

/// Read a source file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(io_error)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// `codepad lex`: one line per token.
pub fn lex_file(options: &HighlightOptions) -> Result<(), CliError> {
    let path = options.require_path()?;
    let source = read_source(path)?;
    let language = options.resolved_language();
    tracing::debug!(path = %path.display(), %language, profile = %options.profile, "lex");
    print!("{}", render_lex(&source, language, options.profile));
    Ok(())
}

/// `codepad highlight`: the file in terminal colors.
pub fn highlight_file(options: &HighlightOptions) -> Result<(), CliError> {
    let path = options.require_path()?;
    let source = read_source(path)?;
    let language = options.resolved_language();
    tracing::debug!(path = %path.display(), %language, theme = %options.theme, "highlight");
    print!("{}", render_ansi(&source, language, options.theme));
    Ok(())
}

/// `codepad json`: styled tokens as a JSON array.
pub fn json_file(options: &HighlightOptions) -> Result<(), CliError> {
    let path = options.require_path()?;
    let source = read_source(path)?;
    println!(
        "{}",
        render_json(&source, options.resolved_language(), options.theme)?
    );
    Ok(())
}

/// `codepad colors`: the palette for one theme.
pub fn print_colors(options: &HighlightOptions) {
    print!("{}", render_colors(options.theme));
}

/// `codepad template <language>`.
pub fn print_template(name: &str) {
    print!("{}", Language::from_name(name).template());
}

pub fn render_lex(source: &str, language: Language, profile: Profile) -> String {
    let tokens = tokenize(source, language, profile);
    let mut out = String::new();
    for token in &tokens {
        let _ = writeln!(out, "{:<12}{:?}", token.kind.name(), token.text);
    }
    out
}

pub fn render_ansi(source: &str, language: Language, theme: Theme) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in highlight(source, language, theme) {
        ansi::paint(&mut out, token.text, token.color);
    }
    out
}

pub fn render_json(source: &str, language: Language, theme: Theme) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&highlight(source, language, theme))?)
}

pub fn render_colors(theme: Theme) -> String {
    let mut out = String::new();
    for kind in TokenKind::ALL {
        let color = color_for(kind, theme);
        let mut swatch = String::new();
        ansi::paint(&mut swatch, "■", color);
        let _ = writeln!(out, "{swatch} {:<12}{color}", kind.name());
    }
    out
}
