//! # Lexicon - dictionary console
//!
//! Lexicon is an administrative console for "dictionaries": named record
//! schemas kept by a remote schema-management service. Users create
//! dictionaries, add typed fields (including references to other
//! dictionaries) and enter records against a dictionary's schema.
//!
//! ## Features
//!
//! - **Schema interpretation**: any JSON-Schema-like document becomes an
//!   ordered list of field descriptors, never an error
//! - **Record table**: one column per field, kind-annotated headers
//! - **Record form**: one control per field kind, sparse drafts
//! - **Authoring rules**: blank names are never sent, `ref` fields never
//!   carry a type
//! - **Service clients**: HTTP (`reqwest`) and in-memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lexicon::adapters::InMemorySchemaStore;
//! use lexicon::application::Console;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut console = Console::new(Arc::new(InMemorySchemaStore::new()));
//!     console.create_dictionary("Customer").await?;
//!     console.open_dictionary("Customer").await?;
//!     console.begin_record();
//!     console.save_record();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema, record and authoring types; the `SchemaPort` trait
//! - **Schema form**: interpreter, table renderer, form controller
//! - **Application**: workspace state and the console intents
//! - **Adapters**: schema service clients
//! - **Config / CLI / shell**: the native command-line host
//!
//! With default features off only the domain, schema form and application
//! layers are built, which is what the web UI uses.

#[cfg(feature = "native")]
pub mod adapters;
pub mod application;
#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod config;
pub mod domain;
pub mod schema_form;
#[cfg(feature = "native")]
pub mod shell;
