use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use shelf_items::ItemStack;

use crate::context::BuildContext;
use crate::sink::OutputSink;

/// Stable tab identifier, unique across a catalog.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TabId(pub String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        TabId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TabId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        TabId(s.to_string())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout band a tab sits in. Top sorts before bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Row {
    Top,
    Bottom,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Top => f.write_str("top"),
            Row::Bottom => f.write_str("bottom"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabKind {
    Category,
    Search,
    Hotbar,
    Inventory,
}

pub type Generator = Arc<dyn Fn(&BuildContext, &mut OutputSink) + Send + Sync>;
pub type IconSupplier = Arc<dyn Fn() -> ItemStack + Send + Sync>;

/// How a tab's contents are produced on rebuild.
#[derive(Clone, Default)]
pub enum TabContents {
    /// Nothing generated (e.g. the player inventory).
    #[default]
    Empty,
    Generated(Generator),
    /// Deduplicated union of every non-search tab's search items.
    SearchIndex,
}

impl fmt::Debug for TabContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabContents::Empty => f.write_str("Empty"),
            TabContents::Generated(_) => f.write_str("Generated(..)"),
            TabContents::SearchIndex => f.write_str("SearchIndex"),
        }
    }
}

/// Static definition of one catalog tab. Never mutated after construction;
/// only its generated contents are rebuilt.
#[derive(Clone)]
pub struct TabDescriptor {
    pub id: TabId,
    pub title: String,
    pub row: Row,
    pub column: u32,
    pub kind: TabKind,
    pub aligned_right: bool,
    pub hide_title: bool,
    pub no_scroll_bar: bool,
    // Not listed by default (e.g. operator-only tabs)
    pub hidden: bool,
    icon: IconSupplier,
    contents: TabContents,
}

impl TabDescriptor {
    pub fn builder(id: &str, row: Row, column: u32) -> TabBuilder {
        TabBuilder {
            id: TabId::new(id),
            title: id.to_string(),
            row,
            column,
            kind: TabKind::Category,
            aligned_right: false,
            hide_title: false,
            no_scroll_bar: false,
            hidden: false,
            icon: None,
            contents: TabContents::Empty,
        }
    }

    pub fn icon(&self) -> ItemStack {
        (self.icon)()
    }

    pub fn contents(&self) -> &TabContents {
        &self.contents
    }

    #[inline]
    pub fn position(&self) -> (Row, u32) {
        (self.row, self.column)
    }

    #[inline]
    pub fn is_category(&self) -> bool {
        self.kind == TabKind::Category
    }

    #[inline]
    pub fn shown_by_default(&self) -> bool {
        !self.hidden
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("id", &self.id)
            .field("row", &self.row)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .field("hidden", &self.hidden)
            .field("contents", &self.contents)
            .finish_non_exhaustive()
    }
}

pub struct TabBuilder {
    id: TabId,
    title: String,
    row: Row,
    column: u32,
    kind: TabKind,
    aligned_right: bool,
    hide_title: bool,
    no_scroll_bar: bool,
    hidden: bool,
    icon: Option<IconSupplier>,
    contents: TabContents,
}

impl TabBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn kind(mut self, kind: TabKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn aligned_right(mut self) -> Self {
        self.aligned_right = true;
        self
    }

    pub fn hide_title(mut self) -> Self {
        self.hide_title = true;
        self
    }

    pub fn no_scroll_bar(mut self) -> Self {
        self.no_scroll_bar = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn icon(mut self, icon: impl Fn() -> ItemStack + Send + Sync + 'static) -> Self {
        self.icon = Some(Arc::new(icon));
        self
    }

    pub fn generator(
        mut self,
        generator: impl Fn(&BuildContext, &mut OutputSink) + Send + Sync + 'static,
    ) -> Self {
        self.contents = TabContents::Generated(Arc::new(generator));
        self
    }

    /// Marks this tab as the search index.
    pub fn search_index(mut self) -> Self {
        self.kind = TabKind::Search;
        self.contents = TabContents::SearchIndex;
        self
    }

    pub fn build(self) -> TabDescriptor {
        TabDescriptor {
            id: self.id,
            title: self.title,
            row: self.row,
            column: self.column,
            kind: self.kind,
            aligned_right: self.aligned_right,
            hide_title: self.hide_title,
            no_scroll_bar: self.no_scroll_bar,
            hidden: self.hidden,
            icon: self.icon.unwrap_or_else(|| Arc::new(|| ItemStack::new("air"))),
            contents: self.contents,
        }
    }
}
