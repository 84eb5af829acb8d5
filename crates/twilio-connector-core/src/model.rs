//! Model names and synthesized model schemas.
//!
//! The connector exposes five Twilio resources as CRUD-style models. The host
//! runtime addresses them by name (`POST /call`, `POST /message`, ...); this
//! module owns the name-to-discriminant mapping and, when model
//! auto-generation is enabled, the static schemas synthesized from the
//! provider's own resource shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

// =============================================================================
// ModelName
// =============================================================================

/// Logical resource type requested for creation.
///
/// Parsed from the wire string by exact match; any other string is an
/// unsupported model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    /// An outbound voice call.
    Call,
    /// An outbound SMS message.
    Message,
    /// A validated postal address.
    Address,
    /// A call queue.
    Queue,
    /// A subaccount.
    Account,
}

impl ModelName {
    /// All supported models, in dispatch order.
    pub const ALL: [ModelName; 5] = [
        ModelName::Call,
        ModelName::Message,
        ModelName::Address,
        ModelName::Queue,
        ModelName::Account,
    ];

    /// Parses a model name by exact string equality.
    ///
    /// Returns `None` for anything outside the five known tags.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "call" => Some(Self::Call),
            "message" => Some(Self::Message),
            "address" => Some(Self::Address),
            "queue" => Some(Self::Queue),
            "account" => Some(Self::Account),
            _ => None,
        }
    }

    /// Returns the wire name of this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Message => "message",
            Self::Address => "address",
            Self::Queue => "queue",
            Self::Account => "account",
        }
    }

    /// Returns the synthesized schema for this model.
    pub fn descriptor(&self) -> &'static ModelDescriptor {
        &DESCRIPTORS[*self as usize]
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConnectorError::UnsupportedModel(s.to_string()))
    }
}

// =============================================================================
// Synthesized model schemas
// =============================================================================

/// A single field in a synthesized model schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelField {
    /// Field name as it appears in the value bag.
    pub name: &'static str,
    /// Whether the provider requires this field.
    ///
    /// Informational only: the connector never validates fields locally,
    /// missing values surface as provider errors.
    pub required: bool,
}

impl ModelField {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Synthesized schema for one resource model.
///
/// Mirrors the creation parameters of the provider's own resource shape, so a
/// host can auto-generate its model definitions instead of hand-writing them.
#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    /// The model this schema describes.
    pub name: ModelName,
    /// The fields the creation request understands.
    pub fields: &'static [ModelField],
}

/// One descriptor per supported model, indexed by `ModelName as usize`.
static DESCRIPTORS: [ModelDescriptor; 5] = [
    ModelDescriptor {
        name: ModelName::Call,
        fields: &[
            ModelField::required("to"),
            ModelField::optional("url"),
        ],
    },
    ModelDescriptor {
        name: ModelName::Message,
        fields: &[
            ModelField::required("to"),
            ModelField::required("body"),
        ],
    },
    ModelDescriptor {
        name: ModelName::Address,
        fields: &[
            ModelField::optional("friendlyName"),
            ModelField::required("customerName"),
            ModelField::required("street"),
            ModelField::required("city"),
            ModelField::required("region"),
            ModelField::required("postalCode"),
            ModelField::required("isoCountry"),
        ],
    },
    ModelDescriptor {
        name: ModelName::Queue,
        fields: &[ModelField::required("friendlyName")],
    },
    ModelDescriptor {
        name: ModelName::Account,
        fields: &[ModelField::optional("friendlyName")],
    },
];

/// Returns the descriptors for all supported models.
pub fn descriptors() -> &'static [ModelDescriptor] {
    &DESCRIPTORS
}

// =============================================================================
// ModelRegistry
// =============================================================================

/// Host-facing model lookup capability.
///
/// The host application server owns its model system; the connector only
/// offers schemas through this seam and never reimplements registration or
/// routing.
pub trait ModelRegistry: Send + Sync {
    /// Resolves a model by wire name.
    fn resolve(&self, name: &str) -> Option<&ModelDescriptor>;

    /// Returns the wire names of all resolvable models.
    fn model_names(&self) -> Vec<&'static str>;
}

/// Registry backed by the schemas synthesized from the provider's resource
/// shapes.
///
/// Exposed by the runtime when `auto_generate_models` is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratedModelRegistry;

impl ModelRegistry for GeneratedModelRegistry {
    fn resolve(&self, name: &str) -> Option<&ModelDescriptor> {
        ModelName::parse(name).map(|m| m.descriptor())
    }

    fn model_names(&self) -> Vec<&'static str> {
        ModelName::ALL.iter().map(ModelName::as_str).collect()
    }
}
