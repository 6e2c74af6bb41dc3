// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use schemapack::{FieldSpec, Schema};

// ============================================================================
// Schemas
// ============================================================================

/// Schema with one field of every built-in type.
pub fn all_types_schema() -> Schema {
    Schema::new(&all_types_specs()).expect("all-types schema compiles")
}

pub fn all_types_specs() -> Vec<FieldSpec> {
    [
        ("active", "boolean"),
        ("created", "date"),
        ("price", "double"),
        ("ratio", "float"),
        ("i8", "int8"),
        ("i16", "int16"),
        ("i32", "int32"),
        ("i48", "int48"),
        ("u8", "uint8"),
        ("u16", "uint16"),
        ("u32", "uint32"),
        ("u48", "uint48"),
        ("label", "string"),
    ]
    .iter()
    .map(|(name, ty)| FieldSpec::new(*name, *ty))
    .collect()
}

// ============================================================================
// Temporary files
// ============================================================================

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Temporary directory removed on drop.
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let random = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        let dir = std::env::temp_dir().join(format!(
            "schemapack_{}_{}_{}_{}",
            prefix,
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed),
            random
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        Self(dir)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Write `contents` to `name` inside the directory.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}
