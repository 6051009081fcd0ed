//! Descriptor model (subset of `google.protobuf.FileDescriptorProto`).
//!
//! The pipeline only reads names, field kinds/labels, type references, and
//! RPC signatures, so this model keeps exactly those. It can be built from:
//!
//! - `prost-types` descriptors (protoc plugin requests, binary descriptor sets)
//! - Buf's JSON rendering of a descriptor set (`buf build -o descriptor.json`)
//!
//! Every name is optional, as in the wire format. Absent names are not an
//! error anywhere in the pipeline; they resolve to empty identifiers.

use crate::error::SchemaError;
use prost::Message as _;
use prost_types::field_descriptor_proto::{Label, Type};
use serde::{Deserialize, Deserializer};

// =============================================================================
// Model
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileDescriptorSet {
    #[serde(default)]
    pub file: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    pub name: Option<String>,
    pub package: Option<String>,
    #[serde(default, rename = "messageType")]
    pub message_types: Vec<MessageDescriptor>,
    #[serde(default, rename = "enumType")]
    pub enum_types: Vec<EnumDescriptor>,
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageDescriptor {
    pub name: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub label: Option<FieldLabel>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_kind")]
    pub kind: Option<FieldKind>,
    /// Fully-qualified referenced type (`.pkg.Message`) for message/enum fields.
    #[serde(rename = "typeName")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnumDescriptor {
    pub name: Option<String>,
    #[serde(default, rename = "value")]
    pub values: Vec<EnumValueDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnumValueDescriptor {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceDescriptor {
    pub name: Option<String>,
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MethodDescriptor {
    pub name: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "outputType")]
    pub output_type: Option<String>,
}

/// Declared protobuf field kind.
///
/// `Unknown` absorbs anything a decoder does not recognize (future kinds,
/// out-of-range numbers, unexpected JSON strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    Optional,
    Required,
    Repeated,
}

impl FieldKind {
    /// Kind for a raw `FieldDescriptorProto.type` number.
    pub fn from_number(value: i32) -> Self {
        Type::try_from(value).map_or(FieldKind::Unknown, Self::from_proto)
    }

    /// Kind for a JSON enum name such as `TYPE_STRING`.
    pub fn from_name(name: &str) -> Self {
        Type::from_str_name(name).map_or(FieldKind::Unknown, Self::from_proto)
    }

    fn from_proto(ty: Type) -> Self {
        match ty {
            Type::Double => FieldKind::Double,
            Type::Float => FieldKind::Float,
            Type::Int64 => FieldKind::Int64,
            Type::Uint64 => FieldKind::Uint64,
            Type::Int32 => FieldKind::Int32,
            Type::Fixed64 => FieldKind::Fixed64,
            Type::Fixed32 => FieldKind::Fixed32,
            Type::Bool => FieldKind::Bool,
            Type::String => FieldKind::String,
            Type::Group => FieldKind::Group,
            Type::Message => FieldKind::Message,
            Type::Bytes => FieldKind::Bytes,
            Type::Uint32 => FieldKind::Uint32,
            Type::Enum => FieldKind::Enum,
            Type::Sfixed32 => FieldKind::Sfixed32,
            Type::Sfixed64 => FieldKind::Sfixed64,
            Type::Sint32 => FieldKind::Sint32,
            Type::Sint64 => FieldKind::Sint64,
        }
    }
}

impl FieldLabel {
    /// Label for a raw `FieldDescriptorProto.label` number, `None` if out of range.
    pub fn from_number(value: i32) -> Option<Self> {
        Label::try_from(value).ok().map(Self::from_proto)
    }

    /// Label for a JSON enum name such as `LABEL_REPEATED`, `None` if unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        Label::from_str_name(name).map(Self::from_proto)
    }

    fn from_proto(label: Label) -> Self {
        match label {
            Label::Optional => FieldLabel::Optional,
            Label::Required => FieldLabel::Required,
            Label::Repeated => FieldLabel::Repeated,
        }
    }
}

/// Proto3 JSON writes known enum values by name and unknown ones by number.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEnumValue {
    Number(i64),
    Name(String),
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<FieldKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonEnumValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        JsonEnumValue::Number(n) => {
            i32::try_from(n).map_or(FieldKind::Unknown, FieldKind::from_number)
        }
        JsonEnumValue::Name(name) => FieldKind::from_name(&name),
    }))
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<FieldLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonEnumValue>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        JsonEnumValue::Number(n) => i32::try_from(n).ok().and_then(FieldLabel::from_number),
        JsonEnumValue::Name(name) => FieldLabel::from_name(&name),
    }))
}

impl FieldDescriptor {
    pub fn is_repeated(&self) -> bool {
        self.label == Some(FieldLabel::Repeated)
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a binary `google.protobuf.FileDescriptorSet`.
pub fn decode_file_descriptor_set(bytes: &[u8]) -> Result<FileDescriptorSet, SchemaError> {
    let set = prost_types::FileDescriptorSet::decode(bytes)?;
    Ok(FileDescriptorSet::from(&set))
}

/// Parse a descriptor set rendered as JSON by `buf build`.
pub fn parse_descriptor_set_json(text: &str) -> Result<FileDescriptorSet, SchemaError> {
    Ok(serde_json::from_str(text)?)
}

// =============================================================================
// prost-types conversions
// =============================================================================

impl From<&prost_types::FileDescriptorSet> for FileDescriptorSet {
    fn from(set: &prost_types::FileDescriptorSet) -> Self {
        Self {
            file: set.file.iter().map(FileDescriptor::from).collect(),
        }
    }
}

impl From<&prost_types::FileDescriptorProto> for FileDescriptor {
    fn from(file: &prost_types::FileDescriptorProto) -> Self {
        Self {
            name: file.name.clone(),
            package: file.package.clone(),
            message_types: file.message_type.iter().map(MessageDescriptor::from).collect(),
            enum_types: file.enum_type.iter().map(EnumDescriptor::from).collect(),
            services: file.service.iter().map(ServiceDescriptor::from).collect(),
        }
    }
}

impl From<&prost_types::DescriptorProto> for MessageDescriptor {
    fn from(message: &prost_types::DescriptorProto) -> Self {
        Self {
            name: message.name.clone(),
            fields: message.field.iter().map(FieldDescriptor::from).collect(),
        }
    }
}

impl From<&prost_types::FieldDescriptorProto> for FieldDescriptor {
    fn from(field: &prost_types::FieldDescriptorProto) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.and_then(FieldLabel::from_number),
            kind: field.r#type.map(FieldKind::from_number),
            type_name: field.type_name.clone(),
        }
    }
}

impl From<&prost_types::EnumDescriptorProto> for EnumDescriptor {
    fn from(e: &prost_types::EnumDescriptorProto) -> Self {
        Self {
            name: e.name.clone(),
            values: e
                .value
                .iter()
                .map(|v| EnumValueDescriptor {
                    name: v.name.clone(),
                })
                .collect(),
        }
    }
}

impl From<&prost_types::ServiceDescriptorProto> for ServiceDescriptor {
    fn from(svc: &prost_types::ServiceDescriptorProto) -> Self {
        Self {
            name: svc.name.clone(),
            methods: svc.method.iter().map(MethodDescriptor::from).collect(),
        }
    }
}

impl From<&prost_types::MethodDescriptorProto> for MethodDescriptor {
    fn from(m: &prost_types::MethodDescriptorProto) -> Self {
        Self {
            name: m.name.clone(),
            input_type: m.input_type.clone(),
            output_type: m.output_type.clone(),
        }
    }
}
