//! # CAIP Testkit
//!
//! Testing utilities for CAIP identifiers.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Conformance vectors**: CAIP test cases that must round-trip exactly,
//!   plus inputs that must be rejected
//! - **Generators**: Proptest strategies for valid and invalid components
//! - **Fixtures**: An SQLite table for storage-bridge tests
//!
//! ## Conformance Vectors
//!
//! ```rust
//! use caip_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, output) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, output);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use caip_testkit::generators::AnyId;
//!
//! proptest! {
//!     #[test]
//!     fn canonical_form_is_stable(id: AnyId) {
//!         let again = AnyId::parse(id.kind(), &id.canonical()).unwrap();
//!         prop_assert_eq!(again.canonical(), id.canonical());
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use caip_core::ChainId;
//! use caip_testkit::fixtures::SqlFixture;
//!
//! let fixture = SqlFixture::open_memory().unwrap();
//! let row = fixture.store(Some(&ChainId::must_parse("eip155:1"))).unwrap();
//! assert!(fixture.load::<ChainId>(row).unwrap().is_some());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::SqlFixture;
pub use generators::AnyId;
pub use vectors::{
    all_vectors, invalid_vectors, verify_all_vectors, ConformanceVector, Expected, InvalidVector,
};
