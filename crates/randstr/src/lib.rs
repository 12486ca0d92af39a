// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randstr
//!
//! Random alphanumeric and numeric strings for tokens and identifiers, in two
//! quality tiers.
//!
//! - **Fast**: a shared pseudo-random generator, seeded once from the OS
//!   (wall clock if the OS source fails). Never fails; not for secrets.
//! - **Secure**: bytes read from the OS CSPRNG on every call. The `try_*`
//!   forms surface [`EntropyError`]; the plain forms silently regenerate the
//!   string on the fast path instead.
//!
//! Both tiers map random bits onto the alphabet with rejection sampling, so
//! every symbol is equally likely.
//!
//! ## Core Types
//!
//! - [`Generator`]: string service owning both sources
//! - [`FastSource`]: mutex-protected pseudo-random word source
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Alphabet`]: symbol table with derived sampling parameters
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for secure byte sources
//!
//! ## Example
//!
//! ```rust
//! use randstr::{generate_fast_numeric, generate_secure_alphanumeric, initialize};
//!
//! initialize();
//!
//! let token = generate_secure_alphanumeric(24);
//! assert_eq!(token.len(), 24);
//!
//! let code = generate_fast_numeric(6);
//! assert!(code.bytes().all(|b| b.is_ascii_digit()));
//! ```
//!
//! ## Alphabets
//!
//! | Alphabet         | Symbols                  | Candidate bits | Accepted |
//! |------------------|--------------------------|----------------|----------|
//! | [`ALPHANUMERIC`] | `a-z`, `A-Z`, `1-9`, `0` | 6              | 62 / 64  |
//! | [`NUMERIC`]      | `1-9`, `0`               | 5              | 30 / 32  |

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod fast;
mod generator;
mod global;
mod support;
mod system;
mod traits;

pub mod alphabet;
pub mod sampler;

pub use alphabet::{ALPHANUMERIC, Alphabet, NUMERIC};
pub use error::EntropyError;
pub use fast::{FastSource, SeedOrigin};
pub use generator::Generator;
pub use global::{
    generate_fast_alphanumeric, generate_fast_numeric, generate_secure_alphanumeric,
    generate_secure_numeric, initialize, reseed_fast_source, try_generate_secure_alphanumeric,
    try_generate_secure_numeric,
};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
