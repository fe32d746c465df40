//! Reactive layer errors

use thiserror::Error;

/// Errors raised while registering callbacks or dispatching input changes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactiveError {
    /// No input component with this id exists in the layout
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The value has the wrong shape or is out of range for the component
    #[error("Invalid value for {component}: {reason}")]
    InvalidValue { component: String, reason: String },

    /// A callback read an input that has no value yet
    #[error("Input has no value: {0}")]
    MissingInput(String),

    /// Two callbacks registered for the same output
    #[error("Output already has a callback: {0}")]
    DuplicateOutput(String),

    /// The page layout settings cannot produce a usable slider
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
