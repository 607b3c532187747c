// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

/// Why a [`PhoneStack`](crate::PhoneStack) could not initialize.
///
/// [`PhoneStack::new`](crate::PhoneStack::new) never returns this; it logs it
/// and leaves the instance inert. [`PhoneStack::try_new`](crate::PhoneStack::try_new)
/// hands it to the caller instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The root element is not (or no longer) part of the document.
    #[error("container element is not part of the document")]
    StaleRoot,
    /// The container holds no card with a recognized `data-phone` identifier.
    #[error("container has no `.phone` cards with a valid `data-phone` identifier")]
    NoCards,
}

/// A `data-phone` value that is not one of the known identifiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown phone identifier `{0}`")]
pub struct ParsePhoneIdError(pub String);
