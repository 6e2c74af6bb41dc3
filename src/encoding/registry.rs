// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type codec registry.
//!
//! Maps schema type names to [`TypeCodec`] implementations. A registry is
//! assembled once with [`TypeRegistryBuilder`] and is read-only afterwards, so
//! it can be shared freely between threads and schemas.
//!
//! # Example
//!
//! ```
//! use schemapack::encoding::{builtin_registry, TypeRegistry, IntegerCodec};
//!
//! assert!(builtin_registry().contains("uint48"));
//!
//! let registry = TypeRegistry::builder()
//!     .register(IntegerCodec::UINT8)?
//!     .build();
//! assert_eq!(registry.names(), vec!["uint8"]);
//! # Ok::<(), schemapack::CodecError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::types::{
    BooleanCodec, DateCodec, DoubleCodec, FloatCodec, IntegerCodec, StringCodec, TypeCodec,
};
use crate::core::{CodecError, Result};

/// Immutable registry of type codecs, keyed by type name.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    codecs: HashMap<String, Arc<dyn TypeCodec>>,
}

impl TypeRegistry {
    /// Start building a registry.
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Registry holding every built-in codec.
    pub fn builtin() -> Self {
        let codecs: [Arc<dyn TypeCodec>; 13] = [
            Arc::new(BooleanCodec),
            Arc::new(DateCodec),
            Arc::new(DoubleCodec),
            Arc::new(FloatCodec),
            Arc::new(IntegerCodec::INT8),
            Arc::new(IntegerCodec::INT16),
            Arc::new(IntegerCodec::INT32),
            Arc::new(IntegerCodec::INT48),
            Arc::new(StringCodec),
            Arc::new(IntegerCodec::UINT8),
            Arc::new(IntegerCodec::UINT16),
            Arc::new(IntegerCodec::UINT32),
            Arc::new(IntegerCodec::UINT48),
        ];

        Self {
            codecs: codecs
                .into_iter()
                .map(|codec| (codec.name().to_string(), codec))
                .collect(),
        }
    }

    /// Look up a codec by type name.
    pub fn get(&self, type_name: &str) -> Option<&Arc<dyn TypeCodec>> {
        self.codecs.get(type_name)
    }

    /// Check if a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.codecs.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}

/// Builder for [`TypeRegistry`].
#[derive(Default)]
pub struct TypeRegistryBuilder {
    codecs: HashMap<String, Arc<dyn TypeCodec>>,
}

impl TypeRegistryBuilder {
    /// Start from the built-in catalog, to extend it with custom codecs.
    pub fn with_builtins() -> Self {
        Self {
            codecs: TypeRegistry::builtin().codecs,
        }
    }

    /// Register a codec under its own name.
    ///
    /// Fails with [`CodecError::DuplicateType`] when the name is taken.
    pub fn register(self, codec: impl TypeCodec + 'static) -> Result<Self> {
        self.register_arc(Arc::new(codec))
    }

    /// Register an already shared codec.
    pub fn register_arc(mut self, codec: Arc<dyn TypeCodec>) -> Result<Self> {
        let name = codec.name().to_string();
        if self.codecs.contains_key(&name) {
            return Err(CodecError::duplicate_type(name));
        }
        self.codecs.insert(name, codec);
        Ok(self)
    }

    /// Finish the registry.
    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            codecs: self.codecs,
        }
    }
}

static BUILTIN_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Process-wide registry of built-in codecs, created on first use.
pub fn builtin_registry() -> &'static TypeRegistry {
    BUILTIN_REGISTRY.get_or_init(TypeRegistry::builtin)
}
