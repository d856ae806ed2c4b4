use std::fmt;

/// Route registration error
///
/// Returned by [`PathTrie::insert`](super::PathTrie::insert) when a template
/// is malformed or collides with an existing registration. These are
/// configuration errors: they surface at startup, while routes are being
/// registered, and should abort startup rather than be handled per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// A `*` segment appeared before the final position of the template.
    ///
    /// The catch-all consumes every remaining request segment, so nothing
    /// after it could ever be matched.
    WildcardNotLast {
        /// The offending template, rendered as `/`-joined segments
        template: String,
    },
    /// A wildcard child already exists at this position.
    WildcardTaken {
        /// The offending template, rendered as `/`-joined segments
        template: String,
    },
    /// The exact method+path template was already registered.
    ///
    /// Duplicate registration is rejected rather than silently overwriting
    /// the earlier payload.
    DuplicateRoute {
        /// The offending template, rendered as `/`-joined segments
        template: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::WildcardNotLast { template } => {
                write!(
                    f,
                    "wildcard segments must be the last segment in a path: '{}'",
                    template
                )
            }
            InsertError::WildcardTaken { template } => {
                write!(
                    f,
                    "wildcard segments can only be used once in a path: '{}'",
                    template
                )
            }
            InsertError::DuplicateRoute { template } => {
                write!(f, "duplicate route detected: '{}'", template)
            }
        }
    }
}

impl std::error::Error for InsertError {}
