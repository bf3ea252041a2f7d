use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let options = parse_options(&[]).unwrap();
    assert_eq!(options, HighlightOptions::default());
    assert_eq!(options.profile, Profile::Advanced);
    assert_eq!(options.theme, Theme::Light);
    assert_eq!(options.resolved_language(), Language::JavaScript);
}

#[test]
fn inline_and_separate_values() {
    let options = parse_options(&args(&[
        "main.py",
        "--profile=basic",
        "--theme",
        "dark",
        "--language",
        "cpp",
    ]))
    .unwrap();
    assert_eq!(options.path, Some(PathBuf::from("main.py")));
    assert_eq!(options.profile, Profile::Basic);
    assert_eq!(options.theme, Theme::Dark);
    assert_eq!(options.language, Some(Language::Cpp));
}

#[test]
fn language_inferred_from_extension() {
    let options = parse_options(&args(&["styles.css"])).unwrap();
    assert_eq!(options.resolved_language(), Language::Css);
}

#[test]
fn language_flag_overrides_extension() {
    let options = parse_options(&args(&["page.html", "-l", "xml"])).unwrap();
    assert_eq!(options.resolved_language(), Language::Xml);
}

#[test]
fn short_language_flag_accepts_inline_value() {
    let options = parse_options(&args(&["-l=json", "data.txt"])).unwrap();
    assert_eq!(options.language, Some(Language::Json));
    assert_eq!(options.path, Some(PathBuf::from("data.txt")));
}

#[test]
fn positional_with_equals_sign_is_a_path() {
    let options = parse_options(&args(&["a=b.py"])).unwrap();
    assert_eq!(options.path, Some(PathBuf::from("a=b.py")));
}

#[test]
fn language_flag_accepts_extensions() {
    let options = parse_options(&args(&["--language=py"])).unwrap();
    assert_eq!(options.language, Some(Language::Python));
}

#[test]
fn unknown_language_falls_back_to_javascript() {
    let options = parse_options(&args(&["--language=cobol"])).unwrap();
    assert_eq!(options.language, Some(Language::JavaScript));
}

#[test]
fn unknown_extension_falls_back_to_javascript() {
    for path in ["notes.txt", "main.c"] {
        let options = parse_options(&args(&[path])).unwrap();
        assert_eq!(options.resolved_language(), Language::JavaScript, "{path}");
    }
}

#[test]
fn dark_shorthand() {
    let options = parse_options(&args(&["--dark"])).unwrap();
    assert_eq!(options.theme, Theme::Dark);
}

#[test]
fn bad_theme_is_an_error() {
    let err = parse_options(&args(&["--theme=sepia"])).unwrap_err();
    assert!(matches!(err, CliError::Theme(_)));
    assert_eq!(err.to_string(), "unknown theme `sepia` (expected `light` or `dark`)");
}

#[test]
fn bad_profile_is_an_error() {
    let err = parse_options(&args(&["--profile", "fancy"])).unwrap_err();
    assert!(matches!(err, CliError::Profile(_)));
}

#[test]
fn missing_value_is_a_usage_error() {
    let err = parse_options(&args(&["--theme"])).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "missing value for --theme");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let err = parse_options(&args(&["--verbose"])).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn second_positional_is_a_usage_error() {
    let err = parse_options(&args(&["a.js", "b.js"])).unwrap_err();
    assert_eq!(err.to_string(), "unexpected argument 'b.js'");
}

#[test]
fn require_path() {
    assert!(parse_options(&[]).unwrap().require_path().is_err());
    let options = parse_options(&args(&["-"])).unwrap();
    assert_eq!(options.require_path().unwrap(), Path::new("-"));
}
