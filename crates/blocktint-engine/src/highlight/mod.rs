pub mod schedule;

use crate::document::DocumentSnapshot;
use crate::matching::patterns::{PatternError, resolve_patterns};
use crate::matching::{LineRange, match_blocks};
use crate::settings::HighlightSettings;

/// Receives the marks for one visual level.
///
/// Each call fully replaces the level's previous marks; clearing a level is
/// applying the empty slice. The engine drives every level `0..level_count`
/// on each pass so stale marks can never survive a refresh.
pub trait RenderSink {
    fn apply(&mut self, level: usize, ranges: &[LineRange]);
}

/// The engine's only cross-pass state: the active settings and the enabled
/// flag. Each refresh is a pure pass over a document snapshot; no result is
/// cached between passes.
#[derive(Debug, Clone)]
pub struct Highlighter {
    settings: HighlightSettings,
    enabled: bool,
}

impl Highlighter {
    pub fn new(settings: HighlightSettings) -> Self {
        Self {
            settings,
            enabled: true,
        }
    }

    pub fn with_enabled(settings: HighlightSettings, enabled: bool) -> Self {
        Self { settings, enabled }
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    /// Swap in new settings (the configuration-change notification entry
    /// point). The caller re-runs [`refresh`](Self::refresh) afterwards.
    pub fn update_settings(&mut self, settings: HighlightSettings) {
        self.settings = settings;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enabled flag and return the new state. The caller follows up
    /// with [`refresh`](Self::refresh) (or [`clear`](Self::clear)) to bring
    /// the sink in line.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Run one highlighting pass and hand the result to the sink.
    ///
    /// Disabled state and excluded languages clear any previous marks. A
    /// pattern that fails to compile aborts the pass with the sink left
    /// untouched, so the previous valid marks stay visible instead of
    /// flashing to blank on a settings typo.
    pub fn refresh(
        &self,
        doc: &DocumentSnapshot,
        sink: &mut impl RenderSink,
    ) -> Result<(), PatternError> {
        if !self.enabled || self.settings.is_excluded(doc.language_id()) {
            self.clear(sink);
            return Ok(());
        }

        let set = resolve_patterns(doc.language_id(), &self.settings);
        let ranges = match_blocks(
            doc.lines().iter().map(String::as_str),
            &set,
            self.settings.level_count(),
            self.settings.include_boundary_lines,
        )?;

        for (level, level_ranges) in ranges.iter() {
            sink.apply(level, level_ranges);
        }
        Ok(())
    }

    /// Remove all marks by applying the empty set to every level.
    pub fn clear(&self, sink: &mut impl RenderSink) {
        for level in 0..self.settings.level_count() {
            sink.apply(level, &[]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct RecordingSink {
        marks: BTreeMap<usize, Vec<LineRange>>,
        apply_calls: usize,
    }

    impl RenderSink for RecordingSink {
        fn apply(&mut self, level: usize, ranges: &[LineRange]) {
            self.marks.insert(level, ranges.to_vec());
            self.apply_calls += 1;
        }
    }

    fn python_doc(text: &str) -> DocumentSnapshot {
        DocumentSnapshot::from_text(text, "python")
    }

    #[test]
    fn test_refresh_paints_every_level() {
        let highlighter = Highlighter::new(HighlightSettings::default());
        let doc = python_doc("# region\na\nb\n# end");
        let mut sink = RecordingSink::default();

        highlighter.refresh(&doc, &mut sink).unwrap();

        assert_eq!(sink.apply_calls, 4);
        assert_eq!(sink.marks[&0], vec![LineRange {
            first_line: 1,
            last_line: 2
        }]);
        for level in 1..4 {
            assert!(sink.marks[&level].is_empty());
        }
    }

    #[test]
    fn test_excluded_language_clears_instead_of_matching() {
        let settings = HighlightSettings {
            excluded_languages: vec!["python".to_string()],
            ..Default::default()
        };
        let highlighter = Highlighter::new(settings);
        let doc = python_doc("# region\na\n# end");
        let mut sink = RecordingSink::default();

        highlighter.refresh(&doc, &mut sink).unwrap();

        assert_eq!(sink.apply_calls, 4);
        assert!(sink.marks.values().all(|ranges| ranges.is_empty()));
    }

    #[test]
    fn test_disabled_highlighter_clears() {
        let mut highlighter = Highlighter::new(HighlightSettings::default());
        highlighter.set_enabled(false);
        let doc = python_doc("# region\na\n# end");
        let mut sink = RecordingSink::default();

        highlighter.refresh(&doc, &mut sink).unwrap();

        assert!(sink.marks.values().all(|ranges| ranges.is_empty()));
    }

    #[test]
    fn test_toggle_flips_and_reports_new_state() {
        let mut highlighter = Highlighter::new(HighlightSettings::default());
        assert!(highlighter.is_enabled());
        assert!(!highlighter.toggle());
        assert!(!highlighter.is_enabled());
        assert!(highlighter.toggle());
    }

    #[test]
    fn test_pattern_error_leaves_previous_marks_in_place() {
        let good = Highlighter::new(HighlightSettings::default());
        let doc = python_doc("# region\na\n# end");
        let mut sink = RecordingSink::default();
        good.refresh(&doc, &mut sink).unwrap();
        let marks_before = sink.marks.clone();

        let bad_settings = HighlightSettings {
            start_patterns: vec!["(broken".to_string()],
            ..Default::default()
        };
        let bad = Highlighter::new(bad_settings);

        let result = bad.refresh(&doc, &mut sink);
        assert!(result.is_err());
        assert_eq!(sink.marks, marks_before);
    }

    #[test]
    fn test_refresh_replaces_marks_per_level() {
        let highlighter = Highlighter::new(HighlightSettings::default());
        let mut sink = RecordingSink::default();

        let wide = python_doc("# region\na\nb\nc\n# end");
        highlighter.refresh(&wide, &mut sink).unwrap();
        assert_eq!(sink.marks[&0], vec![LineRange {
            first_line: 1,
            last_line: 3
        }]);

        let empty = python_doc("nothing here");
        highlighter.refresh(&empty, &mut sink).unwrap();
        assert!(sink.marks[&0].is_empty());
    }

    #[test]
    fn test_zero_color_settings_are_a_no_op() {
        let settings = HighlightSettings {
            colors: Vec::new(),
            ..Default::default()
        };
        let highlighter = Highlighter::new(settings);
        let doc = python_doc("# region\na\n# end");
        let mut sink = RecordingSink::default();

        highlighter.refresh(&doc, &mut sink).unwrap();
        assert_eq!(sink.apply_calls, 0);
    }

    #[test]
    fn test_language_override_changes_effective_patterns() {
        let settings = HighlightSettings {
            language_patterns: vec![crate::settings::LanguagePatterns {
                languages: "python,ruby".to_string(),
                start_patterns: Some(vec![r"^=begin marked".to_string()]),
                end_patterns: Some(vec![r"^=end marked".to_string()]),
            }],
            ..Default::default()
        };
        let highlighter = Highlighter::new(settings);
        let mut sink = RecordingSink::default();

        // Default markers no longer apply to this language...
        let doc = python_doc("# region\na\n# end");
        highlighter.refresh(&doc, &mut sink).unwrap();
        assert!(sink.marks.values().all(|ranges| ranges.is_empty()));

        // ...the override's markers do.
        let doc = python_doc("=begin marked\na\n=end marked");
        highlighter.refresh(&doc, &mut sink).unwrap();
        assert_eq!(sink.marks[&0], vec![LineRange {
            first_line: 1,
            last_line: 1
        }]);
    }
}
