//! One file descriptor → one [`GraphQLSchema`].

use crate::classify::classify_services;
use crate::descriptor::FileDescriptor;
use crate::diagnostics::Diagnostic;
use crate::model::{GraphQLSchema, GraphQLType};
use crate::transform::{graphql_enum, graphql_type};

#[derive(Debug, Clone, Default)]
pub struct Assembled {
    pub schema: GraphQLSchema,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn assemble(file: &FileDescriptor) -> Assembled {
    let file_name = file.name.as_deref().unwrap_or_default();

    let all_types: Vec<GraphQLType> = file.message_types.iter().map(graphql_type).collect();
    let enums = file.enum_types.iter().map(graphql_enum).collect();
    let classification = classify_services(file_name, &file.services);

    let (inputs, types): (Vec<_>, Vec<_>) = all_types
        .into_iter()
        .partition(|t| classification.input_types.contains(&t.name));

    Assembled {
        schema: GraphQLSchema {
            types,
            inputs,
            enums,
            queries: classification.queries,
            mutations: classification.mutations,
        },
        diagnostics: classification.diagnostics,
    }
}
