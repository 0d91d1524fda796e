// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Chipline crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "buffer_adapter")]
pub mod buffer;
