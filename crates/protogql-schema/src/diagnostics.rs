//! Non-fatal findings reported alongside a generated schema.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// RPC method whose name matches neither the query nor the mutation prefixes.
    UnrecognizedMethod,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Source `.proto` file (empty when the descriptor has no name).
    pub file: String,
    pub service: String,
    pub method: String,
}

impl Diagnostic {
    pub fn unrecognized_method(file: &str, service: &str, method: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnrecognizedMethod,
            file: file.to_string(),
            service: service.to_string(),
            method: method.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnrecognizedMethod => write!(
                f,
                "{}: method `{}.{}` is neither a query (Get*/List*) nor a mutation \
                 (Create*/Update*/Delete*); it was left out of the schema",
                self.file, self.service, self.method
            ),
        }
    }
}
