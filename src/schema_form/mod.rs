//! Schema-driven rendering and editing
//!
//! Derives, from a runtime-loaded [`Schema`](crate::domain::Schema):
//! - the field descriptors (`resolver`)
//! - a read-only record table (`table`)
//! - a data-entry form with one control per field (`fields`, `controller`)

pub mod controller;
pub mod fields;
pub mod resolver;
pub mod table;

pub use controller::{FormController, FormField};
pub use fields::FormControl;
pub use resolver::{derive_fields, DescriptorKind, FieldDescriptor};
pub use table::{render_table, ColumnHeader, TableBody, TableView, NO_RECORDS};
