//! Per-file outcomes
//!
//! The formatting engine answers with a [`FormatVerdict`]; the runner turns
//! that (or a cache hit) into an [`Outcome`] for the report. Content that
//! came back identical is a verdict, not an error.

/// Classification of a single file's processing result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Content is identical to the source
    Unchanged,

    /// Content is identical according to the prior-run cache; only the
    /// message differs from [`Outcome::Unchanged`]
    CachedUnchanged,

    /// Content differs from the source
    Changed,
}

impl Outcome {
    /// Whether the file needed (or would need) reformatting
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// What the formatting engine reports after running on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVerdict {
    /// The reformatted content differs from the source
    Reformatted,

    /// The reformatted content is byte-identical to the source
    NothingChanged,
}

impl From<FormatVerdict> for Outcome {
    fn from(verdict: FormatVerdict) -> Self {
        match verdict {
            FormatVerdict::Reformatted => Outcome::Changed,
            FormatVerdict::NothingChanged => Outcome::Unchanged,
        }
    }
}

/// How the engine should treat a reformatted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBack {
    /// Rewrite the file in place
    Yes,

    /// Only report whether the file would change
    Check,

    /// Show the difference instead of rewriting
    Diff,
}

impl WriteBack {
    /// Pick the write-back mode from the run flags; `diff` wins over `check`
    pub const fn from_flags(check: bool, diff: bool) -> Self {
        if diff {
            Self::Diff
        } else if check {
            Self::Check
        } else {
            Self::Yes
        }
    }
}
