//! Fully-qualified protobuf names → GraphQL simple names.

/// Last dot-separated segment of a (possibly package-qualified) type name.
///
/// `.acme.people.v1.Person` → `Person`, `Person` → `Person`, absent → `""`.
/// Every type reference in the schema (message fields, enum fields, RPC
/// input/output types) goes through here so one qualified name always maps to
/// the same identifier.
pub fn simple_name(qualified: Option<&str>) -> String {
    match qualified {
        Some(name) => match name.rfind('.') {
            Some(idx) => name[idx + 1..].to_string(),
            None => name.to_string(),
        },
        None => String::new(),
    }
}
