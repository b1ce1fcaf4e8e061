//! Composable HTML table markup generation
//!
//! This crate renders accumulated tabular data into nested markup
//! strings. Callers accumulate rows of cell values, configure the
//! wrapping tag, CSS class, inline style, and optional positional
//! counter for each structural role, and render everything to one
//! string. Two parallel designs are provided:
//!
//! - **Composable containers**: a [`Container`] is one reusable
//!   markup-emitting node with independently configurable cell
//!   elements. Role-tagged containers ([`Section`]) compose into a full
//!   table through [`Container::wrapper`].
//! - **Settings objects**: a [`TableBuilder`] reads three standalone
//!   settings objects ([`RowSettings`], [`CellSettings`],
//!   [`ColSettings`]) that can be swapped in wholesale.
//!
//! The engine is a pure string-composition layer: no escaping, no
//! validation of tag names or attribute syntax, no I/O. Output bytes
//! are fully deterministic for a given accumulated state.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Container] --> B[ElementAttrs own]
//!     A --> C[ElementAttrs cell]
//!     A --> D[Data rows]
//!     E[Section] --> F[Role]
//!     E --> A
//!     G[wrapper] --> E
//!     H[TableBuilder] --> I[RowSettings]
//!     H --> J[CellSettings]
//!     H --> K[ColSettings]
//!     H --> D
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabgen::{Container, Section};
//!
//! let mut header = Container::new("div", "header", "", "");
//! header.add_data_string("name").add_data_string("score");
//!
//! let mut body = Container::new("div", "body", "", "");
//! body.add_data_array(serde_json::json!([["ada", 10], ["grace", 12]]))?;
//!
//! let table = Container::new("div", "table", "", "");
//! let html = table.wrapper(&[Section::header(header), Section::body(body)]);
//! assert!(html.starts_with("<div class=\"table\"><div class=\"header\">"));
//! # Ok::<(), tabgen::TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attrs;
pub mod builder;
pub mod container;
pub mod error;
pub mod section;
pub mod settings;

// Re-exports for convenience
pub use attrs::ElementAttrs;
pub use builder::TableBuilder;
pub use container::Container;
pub use error::{Result, TableError};
pub use section::{Role, Section};
pub use settings::{CellSettings, ColSettings, RowSettings, Settings};
