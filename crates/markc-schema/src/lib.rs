// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # markc-schema - known-symbol registry and binary codecs for markup compilation
//!
//! A markup compiler turns a tag-based UI description into a compact binary
//! form. This crate owns the part of that pipeline that is driven by the
//! toolkit's schema: dense identifiers for well-known types and properties,
//! the converter and content rules attached to them, and the binary codecs
//! that replace string conversion for long, regular values.
//!
//! ## Quick Start
//!
//! ```rust
//! use markc_schema::{KnownElement, Result, SymbolRegistry};
//!
//! fn main() -> Result<()> {
//!     let registry = SymbolRegistry::runtime();
//!
//!     // Identifier -> handle -> identifier
//!     let grid = registry.resolve_type(KnownElement::Grid.as_i16())?;
//!     assert_eq!(registry.resolve_element_id(&grid), KnownElement::Grid);
//!
//!     // Compile a point list into its binary payload
//!     let codec = registry.codec_for(KnownElement::PointCollection).unwrap();
//!     let bytes = codec.encode("0,0 10,5 20,0")?;
//!     let value = codec.decode(&bytes)?;
//!     assert_eq!(value, codec.parse("0,0 10,5 20,0")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                         SymbolRegistry                              |
//! |   identifiers | handles | converters | content | codecs             |
//! +---------------------------------------------------------------------+
//! |  convert        |  content          |  codec          |  records    |
//! |  override rules |  content members  |  points, paths  |  bodies,    |
//! |  type defaults  |  accessor dispatch|  int lists      |  dict keys  |
//! +---------------------------------------------------------------------+
//! |                 types: resolvers, host modules, name cache          |
//! +---------------------------------------------------------------------+
//! |                 schema: KnownElement / KnownProperty tables         |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Modules Overview
//!
//! - [`schema`] - identifier tables and wire helpers
//! - [`types`] - type handles and the two resolution strategies
//! - [`registry`] - the facade most callers need
//! - [`convert`] - converter selection
//! - [`content`] - default content members and their collections
//! - [`codec`] - structured value codecs
//! - [`records`] - record streams, template bodies, dictionary keys

/// Structured binary codecs for long, regular value types.
pub mod codec;
/// Registry configuration and static constants.
pub mod config;
/// Content member resolution and host element collaborators.
pub mod content;
/// Converter resolution (type defaults and property overrides).
pub mod convert;
/// Structured error channel.
pub mod error;
/// Record streams, template body codec and dictionary-key extraction.
pub mod records;
/// `SymbolRegistry` facade.
pub mod registry;
/// Known type and property tables.
pub mod schema;
/// Type handles, host modules and resolvers.
pub mod types;

pub use codec::{codec_for, CodecValue, StructuredCodec};
pub use config::{DeploymentMode, ModuleNames, RegistryConfig, SCHEMA_VERSION};
pub use content::{ContentItem, ContentSequence, ElementObject, InstanceFactory};
pub use error::{DecodeError, Error, ErrorCode, InitError, Result, SchemaError, SourcePos};
pub use records::{
    extract_key, DictionaryKey, MemberRef, Record, RecordReader, RecordWriter, TemplateBodyCodec,
    TypeRef,
};
pub use registry::SymbolRegistry;
pub use schema::{KnownElement, KnownProperty, ModuleKind, SchemaStamp, WireSymbol};
pub use types::{initialize, HostModules, InitOutcome, TypeHandle, TypeInfo, TypeModule};
