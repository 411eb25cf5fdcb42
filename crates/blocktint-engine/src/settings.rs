use serde::{Deserialize, Serialize};

/// Start/end pattern overrides for a group of languages.
///
/// `languages` is a comma-joined list of language identifiers
/// (e.g. `"python,ruby"`). A side left as `None` keeps whatever value was in
/// effect before this override was considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePatterns {
    pub languages: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_patterns: Option<Vec<String>>,
}

/// Highlighting configuration consumed by the engine.
///
/// One visual level exists per entry in `colors`; nesting depth rotates
/// through them. Overrides in `language_patterns` are checked in order and
/// the first group containing the document's language wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    pub colors: Vec<String>,
    pub start_patterns: Vec<String>,
    pub end_patterns: Vec<String>,
    pub excluded_languages: Vec<String>,
    pub include_boundary_lines: bool,
    // Kept last so TOML serialization emits plain values before this
    // array of tables.
    pub language_patterns: Vec<LanguagePatterns>,
}

impl HighlightSettings {
    /// Number of visual levels, one per configured color.
    pub fn level_count(&self) -> usize {
        self.colors.len()
    }

    pub fn is_excluded(&self, language_id: &str) -> bool {
        self.excluded_languages.iter().any(|l| l == language_id)
    }
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            colors: vec![
                "rgba(255, 255, 64, 0.07)".to_string(),
                "rgba(127, 255, 127, 0.07)".to_string(),
                "rgba(255, 127, 255, 0.07)".to_string(),
                "rgba(79, 236, 236, 0.07)".to_string(),
            ],
            start_patterns: vec![
                r"^\s*#\s*(?:start|region|begin)".to_string(),
                r"^\s*//\s*(?:start|region|begin)".to_string(),
            ],
            end_patterns: vec![
                r"^\s*#\s*(?:end|endregion)".to_string(),
                r"^\s*//\s*(?:end|endregion)".to_string(),
            ],
            excluded_languages: Vec::new(),
            include_boundary_lines: false,
            language_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_one_level_per_color() {
        let settings = HighlightSettings::default();
        assert_eq!(settings.level_count(), 4);
        assert_eq!(settings.colors.len(), settings.level_count());
    }

    #[test]
    fn test_default_patterns_cover_hash_and_slash_markers() {
        let settings = HighlightSettings::default();
        assert_eq!(settings.start_patterns.len(), 2);
        assert_eq!(settings.end_patterns.len(), 2);
        assert!(settings.start_patterns[0].contains("region"));
        assert!(settings.end_patterns[0].contains("endregion"));
    }

    #[test]
    fn test_excluded_language_is_exact_match() {
        let settings = HighlightSettings {
            excluded_languages: vec!["markdown".to_string()],
            ..Default::default()
        };
        assert!(settings.is_excluded("markdown"));
        assert!(!settings.is_excluded("mark"));
        assert!(!settings.is_excluded("rust"));
    }

    #[test]
    fn test_no_colors_means_no_levels() {
        let settings = HighlightSettings {
            colors: Vec::new(),
            ..Default::default()
        };
        assert_eq!(settings.level_count(), 0);
    }
}
