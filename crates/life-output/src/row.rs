//! Plain data row type written by output backends.

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRow {
    pub generation: u64,
    pub live_cells: u64,
    /// Cells that came alive going into this generation.
    pub births:     u64,
    /// Cells that died going into this generation.
    pub deaths:     u64,
    /// `true` on the single row recording the fixed point that ended the run.
    pub ended:      bool,
}
