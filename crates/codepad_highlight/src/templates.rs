//! Starter content for new files.

use crate::Language;

const JAVASCRIPT: &str = r"// JavaScript Template
function hello() {
  console.log('Hello, World!');
}

hello();
";

const PYTHON: &str = r"# Python Template
def hello():
    print('Hello, World!')

if __name__ == '__main__':
    hello()
";

const JAVA: &str = r#"// Java Template
public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#;

const CPP: &str = r#"// C++ Template
#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}
"#;

const HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hello World</title>
</head>
<body>
    <h1>Hello, World!</h1>
</body>
</html>
"#;

const CSS: &str = r"/* CSS Template */
body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
    background-color: #f5f5f5;
}

h1 {
    color: #333;
    text-align: center;
}
";

const JSON: &str = r#"{
  "name": "example",
  "version": "1.0.0",
  "description": "JSON Template"
}
"#;

const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
    <element>Hello, World!</element>
</root>
"#;

impl Language {
    /// Initial content for a newly created file in this language.
    pub fn template(self) -> &'static str {
        match self {
            Self::JavaScript => JAVASCRIPT,
            Self::Python => PYTHON,
            Self::Java => JAVA,
            Self::Cpp => CPP,
            Self::Html => HTML,
            Self::Css => CSS,
            Self::Json => JSON,
            Self::Xml => XML,
        }
    }
}
