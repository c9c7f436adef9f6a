use thiserror::Error;

use crate::tab::{Row, TabId};

/// Broken static tab layout. Fatal: the catalog must not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate position ({row}, {column}) in tabs `{first}` and `{second}`")]
    DuplicatePosition {
        row: Row,
        column: u32,
        first: TabId,
        second: TabId,
    },
    #[error("duplicate tab id `{0}`")]
    DuplicateId(TabId),
    #[error("tab `{0}` aggregates the search index but is not a search tab")]
    SearchIndexKind(TabId),
    #[error("default tab `{0}` is not registered")]
    UnknownDefaultTab(TabId),
}
