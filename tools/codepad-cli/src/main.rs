//! codepad CLI
//!
//! Tokenize and colorize source files with the editor's highlighter.

use codepad_cli::commands::{highlight_file, json_file, lex_file, print_colors, print_template};
use codepad_cli::{init_tracing, parse_options, CliError};
use codepad_highlight::Language;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "lex" => parse_options(&args[2..]).and_then(|options| lex_file(&options)),
        "highlight" => parse_options(&args[2..]).and_then(|options| highlight_file(&options)),
        "json" => parse_options(&args[2..]).and_then(|options| json_file(&options)),
        "colors" => parse_options(&args[2..]).map(|options| print_colors(&options)),
        "template" => {
            if let Some(name) = args.get(2) {
                print_template(name);
                Ok(())
            } else {
                Err(CliError::Usage("missing language name".to_string()))
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("codepad {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if err.is_usage() {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("codepad syntax highlighter");
    println!();
    println!("Usage: codepad <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Print each token with its type");
    println!("  highlight <file>     Print the file in terminal colors");
    println!("  json <file>          Print colored tokens as JSON");
    println!("  colors               Print the palette");
    println!("  template <language>  Print the starter file for a language");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --language=<name>    Language (default: from file extension, then javascript)");
    println!("  --profile=<name>     basic or advanced (default: advanced)");
    println!("  --theme=<name>       light or dark (default: light)");
    println!("  --dark, --light      Theme shorthands");
    println!();
    println!("Use '-' as <file> to read stdin.");
    println!();
    let names: Vec<&str> = Language::ALL.iter().map(|language| language.name()).collect();
    println!("Languages: {}", names.join(", "));
}
