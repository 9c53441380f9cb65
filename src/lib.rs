//! Theme Tools
//!
//! Helpers for a Shopify theme development workflow:
//!
//! - **Archiving**: pack a theme directory into an uploadable zip
//! - **Schema validation**: check the `{% schema %}` JSON block of a section
//!
//! ## Layout
//!
//! ```text
//! theme/
//! ├── layout/theme.liquid
//! ├── sections/
//! │   └── mobile-bar.liquid   <- {% schema %} { ... } {% endschema %}
//! └── templates/
//!
//! theme_fixed.zip
//! ├── layout/theme.liquid
//! └── sections/mobile-bar.liquid
//! ```

pub mod archive;
pub mod checksum;
pub mod config;
pub mod error;
pub mod report;
pub mod schema;
pub mod validate;

pub use archive::{
    archive_directory, verify_archive, ArchiveEntry, ArchiveOptions, ArchiveSummary,
};
pub use checksum::Checksum;
pub use config::ToolsConfig;
pub use error::{Result, SchemaError, ThemeError};
pub use report::{render, ReportStyle};
pub use schema::{find_schema_block, SchemaBlock};
pub use validate::{
    validate_file, validate_source, SchemaWarning, ValidatedSchema, ValidationOptions,
};
