use std::path::Path;

/// An immutable view of one document for the duration of a matching pass.
///
/// Callers must not feed a live buffer to the engine; they take a snapshot
/// and hand it over. Splitting is on `\n` alone, so a newline-terminated
/// file carries a trailing empty line and CRLF documents keep their `\r`
/// (marker patterns anchor at line start, not line end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    lines: Vec<String>,
    language_id: String,
}

impl DocumentSnapshot {
    pub fn from_text(text: &str, language_id: impl Into<String>) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            language_id: language_id.into(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }
}

/// Editor-style language identifier for a file path, from its extension.
///
/// Stands in for the host editor's language detection; unknown extensions
/// fall back to `plaintext`.
pub fn language_id_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "plaintext";
    };
    match ext {
        "rs" => "rust",
        "py" => "python",
        "rb" => "ruby",
        "js" | "mjs" => "javascript",
        "ts" => "typescript",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "java" => "java",
        "sh" | "bash" => "shellscript",
        "md" => "markdown",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "json" => "json",
        "html" => "html",
        "css" => "css",
        _ => "plaintext",
    }
}
