use blocktint_engine::{LineRange, RenderSink};

/// The viewer-side render target: current marks for every level, replaced
/// wholesale on each engine pass.
#[derive(Debug, Default)]
pub struct LevelMarks {
    levels: Vec<Vec<LineRange>>,
}

impl LevelMarks {
    /// Level to paint a line with, if any.
    ///
    /// Nested blocks cover their inner lines with both the outer and the
    /// inner range; the innermost covering range (the one with the largest
    /// `first_line`) wins.
    pub fn level_for_line(&self, line: usize) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (level, ranges) in self.levels.iter().enumerate() {
            for range in ranges {
                if range.first_line <= line && line <= range.last_line {
                    let replaces = match best {
                        Some((first_line, _)) => range.first_line > first_line,
                        None => true,
                    };
                    if replaces {
                        best = Some((range.first_line, level));
                    }
                }
            }
        }
        best.map(|(_, level)| level)
    }
}

impl RenderSink for LevelMarks {
    fn apply(&mut self, level: usize, ranges: &[LineRange]) {
        if self.levels.len() <= level {
            self.levels.resize(level + 1, Vec::new());
        }
        self.levels[level] = ranges.to_vec();
    }
}
