// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Header byte protocol.
//!
//! Every encoded field starts with one header byte naming the field and its
//! presence state, so units can be decoded in any order.
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +-------+-----------------------+
//! | state |      field index      |
//! +-------+-----------------------+
//! ```
//!
//! State bits: `00` present, `01` null, `10` undefined, `11` reserved.
//! This layout is a wire-format contract: changing it breaks every buffer
//! written by an earlier version.

use std::fmt;

use crate::core::{CodecError, Result, Slot};

/// Width of a header byte on the wire.
pub const HEADER_SIZE: usize = 1;

/// Number of low bits holding the field index.
const INDEX_BITS: u32 = 6;

const INDEX_MASK: u8 = (1 << INDEX_BITS) - 1;

/// Largest field index a header byte can carry.
pub const MAX_FIELD_INDEX: usize = INDEX_MASK as usize;

/// Maximum number of fields in one schema.
pub const MAX_FIELDS: usize = MAX_FIELD_INDEX + 1;

/// Presence state of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PresenceState {
    /// A payload follows the header
    Present = 0,
    /// Explicit null, no payload
    Null = 1,
    /// Explicit undefined, no payload
    Undefined = 2,
}

impl PresenceState {
    /// Presence state of a record slot.
    pub fn of(slot: &Slot) -> Self {
        match slot {
            Slot::Value(_) => PresenceState::Present,
            Slot::Null => PresenceState::Null,
            Slot::Undefined => PresenceState::Undefined,
        }
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PresenceState::Present),
            1 => Some(PresenceState::Null),
            2 => Some(PresenceState::Undefined),
            _ => None,
        }
    }

    /// Whether a payload follows the header.
    pub fn has_payload(self) -> bool {
        self == PresenceState::Present
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceState::Present => "present",
            PresenceState::Null => "null",
            PresenceState::Undefined => "undefined",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A packed header byte.
///
/// The decoded state is kept next to the raw byte, so a `HeaderByte` can
/// only hold one of the three valid state patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderByte {
    byte: u8,
    state: PresenceState,
}

impl HeaderByte {
    /// Pack a field index and presence state.
    ///
    /// Fails with [`CodecError::HeaderOutOfRange`] when `index` exceeds
    /// [`MAX_FIELD_INDEX`].
    pub fn pack(index: usize, state: PresenceState) -> Result<Self> {
        if index > MAX_FIELD_INDEX {
            return Err(CodecError::HeaderOutOfRange {
                index,
                max: MAX_FIELD_INDEX,
            });
        }
        Ok(Self {
            byte: ((state as u8) << INDEX_BITS) | index as u8,
            state,
        })
    }

    /// Validate a raw byte read from the wire.
    ///
    /// The reserved state pattern is rejected as corrupt data; `offset` is
    /// only used for the error report.
    pub fn from_u8(byte: u8, offset: usize) -> Result<Self> {
        let state = PresenceState::from_bits(byte >> INDEX_BITS).ok_or_else(|| {
            CodecError::corrupt(
                offset,
                format!("reserved presence bits in header byte {byte:#04x}"),
            )
        })?;
        Ok(Self { byte, state })
    }

    /// Split into field index and presence state.
    pub fn unpack(self) -> (usize, PresenceState) {
        (self.index(), self.state())
    }

    /// Field index carried by this header.
    #[inline]
    pub fn index(self) -> usize {
        (self.byte & INDEX_MASK) as usize
    }

    /// Presence state carried by this header.
    #[inline]
    pub fn state(self) -> PresenceState {
        self.state
    }

    /// Raw byte value.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self.byte
    }
}
