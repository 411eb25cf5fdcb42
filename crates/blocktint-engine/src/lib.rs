pub mod document;
pub mod highlight;
pub mod io;
pub mod matching;
pub mod settings;

// Re-export key types for easier usage
pub use document::{DocumentSnapshot, language_id_for_path};
pub use highlight::{Highlighter, RenderSink, schedule::Debouncer};
pub use matching::{LevelRanges, LineRange, match_blocks};
pub use matching::patterns::{CompiledPatterns, PatternError, PatternSet, resolve_patterns};
pub use settings::{HighlightSettings, LanguagePatterns};
