pub mod patterns;

use patterns::{CompiledPatterns, PatternError, PatternSet};

/// A contiguous run of lines painted with one level's style.
///
/// Invariant: `first_line <= last_line`. Zero-width blocks are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub first_line: usize,
    pub last_line: usize,
}

/// An opened block awaiting its end marker. Lives on the matcher stack for
/// the duration of one pass and never escapes it.
#[derive(Debug, Clone, Copy)]
struct PendingBlock {
    start_line: usize,
    level: usize,
}

/// Matched ranges grouped by visual level.
///
/// Every level in `0..level_count` is present even when it holds no ranges,
/// so a renderer can replace each level's marks deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRanges {
    levels: Vec<Vec<LineRange>>,
}

impl LevelRanges {
    pub fn empty(level_count: usize) -> Self {
        Self {
            levels: vec![Vec::new(); level_count],
        }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn ranges(&self, level: usize) -> &[LineRange] {
        &self.levels[level]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[LineRange])> {
        self.levels
            .iter()
            .enumerate()
            .map(|(level, ranges)| (level, ranges.as_slice()))
    }

    /// True when no level holds any range.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|ranges| ranges.is_empty())
    }

    fn push(&mut self, level: usize, range: LineRange) {
        self.levels[level].push(range);
    }
}

/// Stack-based scanner converting marker-pattern hits into level ranges.
///
/// Feed lines in order with [`push`](Self::push), then call
/// [`finish`](Self::finish). The start check and the end check on a line are
/// independent, never an else-if: a line matching both sets opens a block
/// and immediately closes the block on top of the stack (which is the one it
/// just opened).
pub struct BlockMatcher<'a> {
    patterns: &'a CompiledPatterns,
    include_boundary_lines: bool,
    stack: Vec<PendingBlock>,
    out: LevelRanges,
}

impl<'a> BlockMatcher<'a> {
    pub fn new(
        patterns: &'a CompiledPatterns,
        level_count: usize,
        include_boundary_lines: bool,
    ) -> Self {
        Self {
            patterns,
            include_boundary_lines,
            stack: Vec::new(),
            out: LevelRanges::empty(level_count),
        }
    }

    pub fn push(&mut self, index: usize, line: &str) {
        let level_count = self.out.level_count();
        if level_count == 0 {
            return;
        }

        if self.patterns.is_start(line) {
            self.stack.push(PendingBlock {
                start_line: index,
                level: self.stack.len() % level_count,
            });
        }

        // An end marker with nothing open is a tolerated anomaly, not an
        // error: arbitrary text routinely contains stray end-looking lines.
        if self.patterns.is_end(line)
            && let Some(block) = self.stack.pop()
        {
            self.close(block, index);
        }
    }

    /// Unmatched starts still on the stack are discarded; they never degrade
    /// to "block extends to end of file".
    pub fn finish(self) -> LevelRanges {
        self.out
    }

    fn close(&mut self, block: PendingBlock, end_line: usize) {
        let (first, last) = if self.include_boundary_lines {
            (block.start_line, end_line)
        } else {
            let Some(last) = end_line.checked_sub(1) else {
                return;
            };
            (block.start_line + 1, last)
        };

        // Boundary-adjacent markers with no interior collapse to nothing.
        if first <= last {
            self.out.push(block.level, LineRange {
                first_line: first,
                last_line: last,
            });
        }
    }
}

/// Run one full matching pass over `lines`.
///
/// Compiles each pattern source once; a source that fails to compile aborts
/// the pass with [`PatternError`] and no partial result. All other inputs,
/// including unmatched markers and the empty document, produce a result
/// without error.
pub fn match_blocks<'a, I>(
    lines: I,
    set: &PatternSet,
    level_count: usize,
    include_boundary_lines: bool,
) -> Result<LevelRanges, PatternError>
where
    I: IntoIterator<Item = &'a str>,
{
    let patterns = CompiledPatterns::compile(set)?;
    let mut matcher = BlockMatcher::new(&patterns, level_count, include_boundary_lines);
    for (index, line) in lines.into_iter().enumerate() {
        matcher.push(index, line);
    }
    Ok(matcher.finish())
}
