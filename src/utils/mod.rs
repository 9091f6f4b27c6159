/// Device selection
pub mod device;

/// Hugging Face utilities
pub mod hugging_face;

/// Logger setup
pub mod logging;

/// Text helpers
pub mod text;
