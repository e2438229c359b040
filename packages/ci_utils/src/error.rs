use derive_more::{Display, Error};

/// Assertion failures raised by page helpers.
///
/// These travel inside `anyhow::Error`, so callers that need the category can
/// `downcast_ref::<AssertionError>()` even after timeout context was attached.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AssertionError {
    /// The page was not in the state an operation requires before acting.
    #[display("precondition violated: {message}")]
    Precondition { message: String },

    /// An action ran but the page never reached the expected state.
    #[display("postcondition violated: {message}")]
    Postcondition { message: String },

    /// A lookup that must yield at least one item yielded none.
    #[display("expected at least one {what}, found none")]
    EmptyEnumeration { what: String },

    #[display(
        "{operation} is supposed to be run on path \"{expected}\", but was run on \"{actual}\""
    )]
    WrongPage {
        operation: String,
        expected: String,
        actual: String,
    },

    #[display("no element matches {query}")]
    NotFound { query: String },
}

impl AssertionError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub fn postcondition(message: impl Into<String>) -> Self {
        Self::Postcondition {
            message: message.into(),
        }
    }

    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyEnumeration { what: what.into() }
    }
}

/// Find the assertion category carried by an `anyhow::Error`, if any.
pub fn assertion_kind(err: &anyhow::Error) -> Option<&AssertionError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<AssertionError>())
}
