//! GraphQL schema model produced by the assembler and consumed by the renderer.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphQLField {
    pub name: String,
    /// Simple (unqualified) type name: a built-in scalar or a declared type.
    pub type_name: String,
    pub repeated: bool,
}

/// An object type, or an `input` type once selected as an RPC input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphQLType {
    pub name: String,
    pub fields: Vec<GraphQLField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphQLEnum {
    pub name: String,
    pub values: Vec<String>,
}

/// One RPC method exposed as a `Query` or `Mutation` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphQLEndpoint {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
}

/// Everything rendered for one `.proto` file.
///
/// `types` and `inputs` partition the file's top-level messages: a message is
/// an input iff its name is the `input_type` of some endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphQLSchema {
    pub types: Vec<GraphQLType>,
    pub inputs: Vec<GraphQLType>,
    pub enums: Vec<GraphQLEnum>,
    pub queries: Vec<GraphQLEndpoint>,
    pub mutations: Vec<GraphQLEndpoint>,
}

impl GraphQLSchema {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.inputs.is_empty()
            && self.enums.is_empty()
            && self.queries.is_empty()
            && self.mutations.is_empty()
    }
}
