//! Import records
//!
//! A resolved identifier is described by an [`ImportInfo`]: the module it
//! comes from, the exported name, and any side-effect imports that must be
//! emitted with it. Resolvers may answer in several shapes
//! ([`ResolverOutput`]); [`ResolverOutput::normalize`] is the single place
//! where those shapes are folded into the canonical record.

use serde::{Deserialize, Serialize};

/// Exported name used for default imports.
pub const DEFAULT_EXPORT: &str = "default";

/// Exported name used for namespace imports (`* as x`).
pub const NAMESPACE_EXPORT: &str = "*";

/// Canonical resolved import record.
///
/// `name` omitted or `"default"` is a default import, `"*"` a namespace
/// import, anything else a named export. An empty `from` means the record
/// carries no usable origin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportInfo {
    #[serde(default)]
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<SideEffects>,
}

impl ImportInfo {
    /// A default import from `from`.
    pub fn default_export(from: impl Into<String>) -> Self {
        ImportInfo {
            from: from.into(),
            name: Some(DEFAULT_EXPORT.to_string()),
            ..Default::default()
        }
    }

    /// A named import of `name` from `from`.
    pub fn named(from: impl Into<String>, name: impl Into<String>) -> Self {
        ImportInfo {
            from: from.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// A namespace import from `from`.
    pub fn namespace(from: impl Into<String>) -> Self {
        Self::named(from, NAMESPACE_EXPORT)
    }

    pub fn with_side_effects(mut self, side_effects: SideEffects) -> Self {
        self.side_effects = Some(side_effects);
        self
    }

    /// Whether the record names a module at all.
    pub fn has_origin(&self) -> bool {
        !self.from.is_empty()
    }

    /// The binding this record produces for the local identifier `local`.
    pub fn binding_for(&self, local: &str) -> ImportBinding {
        ImportBinding {
            from: self.from.clone(),
            name: self.name.clone(),
            alias: Some(local.to_string()),
        }
    }

    /// Bindings for every side-effect entry, in declaration order.
    pub fn side_effect_bindings(&self) -> Vec<ImportBinding> {
        match &self.side_effects {
            Some(side_effects) => side_effects.bindings(),
            None => Vec::new(),
        }
    }
}

/// One import binding destined for a module statement.
///
/// A binding without `alias` is a bare side-effect import and renders no
/// specifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportBinding {
    pub from: String,
    pub name: Option<String>,
    pub alias: Option<String>,
}

impl ImportBinding {
    pub fn side_effect(from: impl Into<String>) -> Self {
        ImportBinding {
            from: from.into(),
            name: None,
            alias: None,
        }
    }

    pub fn is_namespace(&self) -> bool {
        self.name.as_deref() == Some(NAMESPACE_EXPORT)
    }

    /// The exported name, with an omitted or empty name read as the default
    /// export.
    pub fn imported_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_EXPORT,
        }
    }
}

/// Side-effect imports attached to a resolved record.
///
/// `Many` comes first: derived records also deserialize from JSON arrays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SideEffects {
    Many(Vec<SideEffectEntry>),
    One(SideEffectEntry),
}

impl SideEffects {
    pub fn entries(&self) -> &[SideEffectEntry] {
        match self {
            SideEffects::One(entry) => std::slice::from_ref(entry),
            SideEffects::Many(entries) => entries,
        }
    }

    pub fn bindings(&self) -> Vec<ImportBinding> {
        self.entries()
            .iter()
            .map(SideEffectEntry::to_binding)
            .collect()
    }
}

impl From<&str> for SideEffects {
    fn from(from: &str) -> Self {
        SideEffects::One(SideEffectEntry::Path(from.to_string()))
    }
}

/// A single side-effect entry: a bare module or a full record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SideEffectEntry {
    Path(String),
    Info(Box<ImportInfo>),
}

impl SideEffectEntry {
    pub fn to_binding(&self) -> ImportBinding {
        match self {
            SideEffectEntry::Path(from) => ImportBinding::side_effect(from.clone()),
            SideEffectEntry::Info(info) => ImportBinding {
                from: info.from.clone(),
                name: info.name.clone(),
                alias: info.alias.clone(),
            },
        }
    }
}

/// Older resolver record schema.
///
/// Field meanings differ from [`ImportInfo`]: `path` is the origin, `name`
/// the local alias and `importName` the exported name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyImportInfo {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<SideEffects>,
}

/// Any answer a resolver may produce.
///
/// Records carrying `path` are always read with the legacy schema, so
/// `Legacy` is tried before `Info` when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolverOutput {
    /// Bare origin; imported as the default export.
    Path(String),
    Legacy(LegacyImportInfo),
    Info(ImportInfo),
}

impl ResolverOutput {
    /// An empty bare origin counts as "no answer".
    pub fn is_empty(&self) -> bool {
        match self {
            ResolverOutput::Path(from) => from.is_empty(),
            ResolverOutput::Legacy(_) | ResolverOutput::Info(_) => false,
        }
    }

    /// Fold any accepted shape into the canonical record.
    pub fn normalize(self) -> ImportInfo {
        match self {
            ResolverOutput::Path(from) => ImportInfo::default_export(from),
            ResolverOutput::Legacy(legacy) => ImportInfo {
                from: legacy.path,
                name: legacy.import_name,
                alias: legacy.name,
                side_effects: legacy.side_effects,
            },
            ResolverOutput::Info(info) => info,
        }
    }
}

impl From<&str> for ResolverOutput {
    fn from(from: &str) -> Self {
        ResolverOutput::Path(from.to_string())
    }
}

impl From<String> for ResolverOutput {
    fn from(from: String) -> Self {
        ResolverOutput::Path(from)
    }
}

impl From<ImportInfo> for ResolverOutput {
    fn from(info: ImportInfo) -> Self {
        ResolverOutput::Info(info)
    }
}

impl From<LegacyImportInfo> for ResolverOutput {
    fn from(legacy: LegacyImportInfo) -> Self {
        ResolverOutput::Legacy(legacy)
    }
}
