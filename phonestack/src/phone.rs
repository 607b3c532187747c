// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identifiers for the stacked cards.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ParsePhoneIdError;

/// Identifier of one stacked card.
///
/// The set is fixed and ordered; in markup each card carries its identifier
/// as `data-phone="1"`, `"2"`, or `"3"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhoneId {
    /// `"1"`, the back card.
    One,
    /// `"2"`, the middle card.
    Two,
    /// `"3"`, the front card.
    Three,
}

impl PhoneId {
    /// Number of identifiers.
    pub const COUNT: usize = 3;

    /// Every identifier, in stacking order.
    pub const ALL: [Self; Self::COUNT] = [Self::One, Self::Two, Self::Three];

    /// Position in [`PhoneId::ALL`]; also the index into per-item layout arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Identifier at `index` in [`PhoneId::ALL`].
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            2 => Some(Self::Three),
            _ => None,
        }
    }

    /// Markup token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }
}

impl fmt::Display for PhoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneId {
    type Err = ParsePhoneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParsePhoneIdError(s.to_string()))
    }
}
