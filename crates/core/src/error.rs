//! Error taxonomy shared by domain modules.

/// Category of a deterministic domain failure.
///
/// Domain error enums classify each of their variants into one of these kinds so
/// boundary layers can pick a status without matching on individual variants.
/// Failures outside the domain (storage, transport) are not represented here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-policy input, detected before any mutation.
    Validation,
    /// A referenced entry does not exist.
    NotFound,
    /// The request is well-formed but current state forbids it.
    BusinessRule,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::BusinessRule => "business_rule",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
