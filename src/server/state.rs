use crate::pipelines::text_classification::Pipeline;

/// Shared application state, loaded once at startup and read-only afterwards
#[derive(Clone)]
pub struct AppState {
    /// The loaded classifier
    pub pipeline: Pipeline,

    /// Decimal places of the reported confidence
    pub precision: u32,
}

impl AppState {
    /// Create the state shared by every request handler
    pub fn new(pipeline: Pipeline, precision: u32) -> Self {
        Self {
            pipeline,
            precision,
        }
    }
}
