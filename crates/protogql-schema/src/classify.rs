//! RPC methods → GraphQL queries and mutations.
//!
//! Classification is a pure naming convention over method names (no
//! annotations are consulted):
//!
//! - `Get*` / `List*` → query
//! - `Create*` / `Update*` / `Delete*` → mutation
//! - anything else → left out, reported as a [`Diagnostic`]
//!
//! Matching is exact and case-sensitive (`getPerson` is not a query).
//!
//! As a side effect the classifier collects the input message of every
//! classified method; the assembler turns those messages into `input` types.

use std::collections::HashSet;

use crate::descriptor::{MethodDescriptor, ServiceDescriptor};
use crate::diagnostics::Diagnostic;
use crate::model::GraphQLEndpoint;
use crate::names::simple_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Mutation,
}

const OPERATION_PREFIXES: [(&str, Operation); 5] = [
    ("Get", Operation::Query),
    ("List", Operation::Query),
    ("Create", Operation::Mutation),
    ("Update", Operation::Mutation),
    ("Delete", Operation::Mutation),
];

/// Operation implied by a method name, `None` when no prefix matches.
pub fn classify_method_name(name: &str) -> Option<Operation> {
    OPERATION_PREFIXES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, op)| *op)
}

#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub queries: Vec<GraphQLEndpoint>,
    pub mutations: Vec<GraphQLEndpoint>,
    /// Simple names of messages used as the input of a classified method.
    pub input_types: HashSet<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    fn add_method(&mut self, file_name: &str, service_name: &str, method: &MethodDescriptor) {
        let name = method.name.clone().unwrap_or_default();
        let Some(op) = classify_method_name(&name) else {
            tracing::debug!(
                file = %file_name,
                service = %service_name,
                method = %name,
                "skipping rpc without a query/mutation prefix"
            );
            self.diagnostics
                .push(Diagnostic::unrecognized_method(file_name, service_name, &name));
            return;
        };

        let endpoint = GraphQLEndpoint {
            name,
            input_type: simple_name(method.input_type.as_deref()),
            output_type: simple_name(method.output_type.as_deref()),
        };
        self.input_types.insert(endpoint.input_type.clone());
        match op {
            Operation::Query => self.queries.push(endpoint),
            Operation::Mutation => self.mutations.push(endpoint),
        }
    }
}

/// Classify every method of every service, in file then declaration order.
pub fn classify_services(file_name: &str, services: &[ServiceDescriptor]) -> Classification {
    let mut out = Classification::default();
    for svc in services {
        let service_name = svc.name.clone().unwrap_or_default();
        for method in &svc.methods {
            out.add_method(file_name, &service_name, method);
        }
    }
    out
}
