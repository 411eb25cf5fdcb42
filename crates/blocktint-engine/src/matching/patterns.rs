use regex::Regex;

use crate::settings::HighlightSettings;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid block pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Ordered start/end pattern sources for one document, after language
/// overrides have been applied. Sources are not validated here; compilation
/// happens in [`CompiledPatterns::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    pub start: Vec<String>,
    pub end: Vec<String>,
}

/// Resolve the effective pattern lists for a document language.
///
/// Defaults come from the settings verbatim. Overrides are checked in order;
/// the first group whose comma-split member list contains `language_id`
/// replaces whichever sides it carries, and later groups are not consulted.
pub fn resolve_patterns(language_id: &str, settings: &HighlightSettings) -> PatternSet {
    let mut start = settings.start_patterns.clone();
    let mut end = settings.end_patterns.clone();

    for group in &settings.language_patterns {
        if group.languages.split(',').any(|l| l.trim() == language_id) {
            if let Some(overrides) = &group.start_patterns {
                start = overrides.clone();
            }
            if let Some(overrides) = &group.end_patterns {
                end = overrides.clone();
            }
            break;
        }
    }

    PatternSet { start, end }
}

/// Pattern sets compiled once per matching pass.
#[derive(Debug)]
pub struct CompiledPatterns {
    start: Vec<Regex>,
    end: Vec<Regex>,
}

impl CompiledPatterns {
    /// Compile every source in the set, failing on the first invalid one.
    ///
    /// A bad pattern is a hard configuration error: silently skipping it
    /// would change highlighting semantics without the user noticing.
    pub fn compile(set: &PatternSet) -> Result<Self, PatternError> {
        Ok(Self {
            start: compile_all(&set.start)?,
            end: compile_all(&set.end)?,
        })
    }

    pub fn is_start(&self, line: &str) -> bool {
        self.start.iter().any(|re| re.is_match(line))
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.iter().any(|re| re.is_match(line))
    }
}

fn compile_all(sources: &[String]) -> Result<Vec<Regex>, PatternError> {
    sources
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| PatternError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
