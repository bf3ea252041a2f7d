//! Per-language keyword and builtin tables.
//!
//! Two tables per language:
//! 1. **Keywords**: reserved words, always classified as `keyword`.
//! 2. **Builtins**: well-known library names, classified as `function` in the
//!    advanced profile even without a following `(`.
//!
//! Matching is exact and case-sensitive. `Xml` and `Json` have no tables of
//! their own and use JavaScript's. The `Html` and `Css` tables only apply in
//! the basic profile; the advanced profile uses JavaScript's for them too.
//! Only JavaScript and Python have builtins.

use crate::{Language, Profile};

/// Returns `true` if `text` is a reserved word in `language` under `profile`.
pub(crate) fn is_keyword(language: Language, profile: Profile, text: &str) -> bool {
    match language {
        Language::Python => is_python_keyword(text),
        Language::Java => is_java_keyword(text),
        Language::Cpp => is_cpp_keyword(text),
        Language::Html if !profile.is_advanced() => is_html_keyword(text),
        Language::Css if !profile.is_advanced() => is_css_keyword(text),
        Language::JavaScript
        | Language::Xml
        | Language::Json
        | Language::Html
        | Language::Css => is_javascript_keyword(text),
    }
}

/// Returns `true` if `text` is a builtin library name in `language`.
pub(crate) fn is_builtin(language: Language, text: &str) -> bool {
    match language {
        Language::JavaScript => is_javascript_builtin(text),
        Language::Python => is_python_builtin(text),
        Language::Java
        | Language::Cpp
        | Language::Html
        | Language::Css
        | Language::Xml
        | Language::Json => false,
    }
}

fn is_javascript_keyword(text: &str) -> bool {
    matches!(
        text,
        "function"
            | "const"
            | "let"
            | "var"
            | "return"
            | "if"
            | "else"
            | "for"
            | "while"
            | "do"
            | "switch"
            | "case"
            | "break"
            | "continue"
            | "try"
            | "catch"
            | "finally"
            | "throw"
            | "new"
            | "this"
            | "class"
            | "extends"
            | "import"
            | "export"
            | "default"
            | "async"
            | "await"
            | "true"
            | "false"
            | "null"
            | "undefined"
            | "typeof"
            | "instanceof"
            | "in"
            | "of"
            | "delete"
            | "void"
            | "yield"
    )
}

fn is_python_keyword(text: &str) -> bool {
    matches!(
        text,
        "def"
            | "class"
            | "if"
            | "elif"
            | "else"
            | "for"
            | "while"
            | "break"
            | "continue"
            | "return"
            | "import"
            | "from"
            | "as"
            | "try"
            | "except"
            | "finally"
            | "with"
            | "lambda"
            | "yield"
            | "assert"
            | "pass"
            | "raise"
            | "True"
            | "False"
            | "None"
            | "and"
            | "or"
            | "not"
            | "is"
            | "in"
            | "global"
            | "nonlocal"
    )
}

fn is_java_keyword(text: &str) -> bool {
    matches!(
        text,
        "public"
            | "private"
            | "protected"
            | "static"
            | "final"
            | "class"
            | "interface"
            | "extends"
            | "implements"
            | "new"
            | "return"
            | "if"
            | "else"
            | "for"
            | "while"
            | "do"
            | "switch"
            | "case"
            | "break"
            | "continue"
            | "try"
            | "catch"
            | "finally"
            | "throw"
            | "throws"
            | "import"
            | "package"
            | "void"
            | "int"
            | "String"
            | "boolean"
            | "true"
            | "false"
            | "null"
            | "abstract"
            | "synchronized"
            | "volatile"
            | "transient"
    )
}

fn is_cpp_keyword(text: &str) -> bool {
    matches!(
        text,
        "int"
            | "float"
            | "double"
            | "char"
            | "bool"
            | "void"
            | "return"
            | "if"
            | "else"
            | "for"
            | "while"
            | "do"
            | "switch"
            | "case"
            | "break"
            | "continue"
            | "class"
            | "struct"
            | "public"
            | "private"
            | "protected"
            | "new"
            | "delete"
            | "const"
            | "static"
            | "virtual"
            | "true"
            | "false"
            | "nullptr"
            | "template"
            | "typename"
            | "using"
            | "namespace"
    )
}

/// Element and attribute names. Only reached for text outside tags, since
/// the advanced profile scans whole tags as one token.
fn is_html_keyword(text: &str) -> bool {
    matches!(
        text,
        "html"
            | "head"
            | "body"
            | "div"
            | "span"
            | "p"
            | "a"
            | "img"
            | "button"
            | "input"
            | "form"
            | "script"
            | "style"
            | "meta"
            | "title"
            | "link"
            | "class"
            | "id"
            | "href"
            | "src"
            | "type"
    )
}

/// Property and value names that are valid identifiers. Hyphenated names
/// such as `font-size` scan as several tokens and cannot match.
fn is_css_keyword(text: &str) -> bool {
    matches!(
        text,
        "color"
            | "background"
            | "margin"
            | "padding"
            | "border"
            | "width"
            | "height"
            | "display"
            | "flex"
            | "grid"
            | "position"
            | "absolute"
            | "relative"
            | "fixed"
    )
}

fn is_javascript_builtin(text: &str) -> bool {
    matches!(
        text,
        "console"
            | "log"
            | "alert"
            | "parseInt"
            | "parseFloat"
            | "isNaN"
            | "Array"
            | "Object"
            | "String"
            | "Number"
            | "Boolean"
            | "Date"
            | "Math"
            | "JSON"
            | "Promise"
            | "setTimeout"
            | "setInterval"
    )
}

fn is_python_builtin(text: &str) -> bool {
    matches!(
        text,
        "print"
            | "len"
            | "range"
            | "enumerate"
            | "zip"
            | "map"
            | "filter"
            | "sorted"
            | "sum"
            | "min"
            | "max"
            | "abs"
            | "round"
            | "open"
            | "input"
            | "str"
            | "int"
            | "float"
            | "list"
            | "dict"
            | "set"
            | "tuple"
    )
}
