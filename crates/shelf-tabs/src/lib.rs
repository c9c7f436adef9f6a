//! Creative catalog tabs: descriptors, generators, and the cached catalog build.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod context;
pub mod error;
pub mod generators;
pub mod sink;
pub mod tab;
pub mod vanilla;
pub mod visibility;

pub use catalog::{BuiltCatalog, BuiltTab, CatalogState, TabCatalog};
pub use context::BuildContext;
pub use error::CatalogError;
pub use sink::{ItemSet, OutputSink};
pub use tab::{Row, TabContents, TabDescriptor, TabId, TabKind};
pub use visibility::Visibility;
