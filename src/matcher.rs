//! Line matching against compiled detector patterns.

use regex::Regex;

use crate::error::PatternError;
use crate::pattern::PatternDef;

/// A single pattern hit within a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Identifier of the pattern that matched.
    pub pattern_id: &'static str,
    /// The matched secret text: capture group 1 when the pattern defines
    /// one, otherwise the whole match.
    pub text: Box<str>,
}

struct CompiledPattern {
    def: &'static PatternDef,
    regex: Regex,
}

/// Compiled patterns for one detector.
///
/// Every regex is compiled once at construction and shared read-only across
/// calls; `analyze_line` performs no allocation beyond its result vector.
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl std::fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternSet")
            .field("patterns", &self.patterns.len())
            .finish_non_exhaustive()
    }
}

impl PatternSet {
    /// Compiles every definition in `defs`, preserving declaration order.
    pub fn compile(defs: &'static [PatternDef]) -> Result<Self, PatternError> {
        let patterns = defs
            .iter()
            .map(|def| {
                let regex = Regex::new(def.regex).map_err(|source| PatternError::InvalidRegex {
                    id: def.id.to_string(),
                    source,
                })?;
                Ok(CompiledPattern { def, regex })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Self { patterns })
    }

    /// Returns the number of compiled patterns in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the set contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Matches every pattern against a single line of text.
    ///
    /// Patterns are evaluated independently in declaration order, so a
    /// higher-priority pattern's matches always precede a lower-priority
    /// pattern's in the result. Patterns whose keywords are absent from the
    /// line are skipped without running the regex. Input that matches
    /// nothing simply yields an empty vector.
    #[must_use]
    pub fn analyze_line(&self, line: &str) -> Vec<LineMatch> {
        let mut matches = Vec::new();

        for pattern in &self.patterns {
            if !pattern.def.keywords.is_empty() && !pattern.def.keywords.iter().any(|kw| line.contains(kw)) {
                continue;
            }

            for caps in pattern.regex.captures_iter(line) {
                let Some(mat) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };

                matches.push(LineMatch {
                    pattern_id: pattern.def.id,
                    text: mat.as_str().into(),
                });
            }
        }

        matches
    }
}
