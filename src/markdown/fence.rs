//! Fenced code block tracking.

/// Marker that opens and closes a fenced code block.
const FENCE_MARKER: &str = "```";

/// Position of the scan relative to fenced code blocks.
///
/// Starts `Outside` for every document and is carried explicitly from one
/// line to the next. An odd number of fence lines leaves the remainder of the
/// document `Inside`; that is not treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

/// What the pipeline should do with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Emit the line unmodified.
    Verbatim,
    /// Run the line through the rewrite stages.
    Rewrite,
}

impl FenceState {
    /// Advances the state machine over one line.
    ///
    /// Fence lines (trimmed content starting with three or more backticks)
    /// toggle the state unconditionally and are always verbatim, language tag
    /// included. Any line seen while `Inside` is verbatim as well.
    ///
    /// # Arguments
    ///
    /// * `line`: Line content without its line break
    ///
    /// # Returns
    ///
    /// State for the next line and the disposition of this one
    pub fn advance(self, line: &str) -> (FenceState, Disposition) {
        if is_fence_line(line) {
            return (self.toggled(), Disposition::Verbatim);
        }

        match self {
            FenceState::Inside => (self, Disposition::Verbatim),
            FenceState::Outside => (self, Disposition::Rewrite),
        }
    }

    /// Returns the opposite state.
    pub fn toggled(self) -> FenceState {
        match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        }
    }

    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }
}

/// Checks whether a line opens or closes a fenced code block.
pub fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}
