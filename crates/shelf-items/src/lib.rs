//! Item, feature, and content registry crate.
#![forbid(unsafe_code)]

pub mod config;
pub mod features;
pub mod registry;
pub mod types;

pub use features::FeatureSet;
pub use registry::ContentRegistry;
pub use types::{DataValue, ItemId, ItemStack, StackData};
