/// Processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenoiseStage {
    Reading,
    Validating,
    Filtering,
    Normalizing,
    Writing,
}

impl std::fmt::Display for DenoiseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading inputs"),
            Self::Validating => write!(f, "Validating"),
            Self::Filtering => write!(f, "Filtering"),
            Self::Normalizing => write!(f, "Normalizing"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Thread-safe progress reporting for the denoiser.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (the search window size while filtering), if known.
    fn begin_stage(&self, _stage: DenoiseStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when no caller is listening.
pub(crate) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
