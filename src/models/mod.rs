// Models module - perspective data structures and API envelopes

pub mod perspective;
pub mod responses;

// Re-export all models for easier imports
pub use perspective::*;
pub use responses::*;
