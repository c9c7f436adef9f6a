use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::{HashMap, HashSet};
use shelf_items::ItemStack;

use crate::context::BuildContext;
use crate::error::CatalogError;
use crate::sink::{ItemSet, OutputSink};
use crate::tab::{Row, TabContents, TabDescriptor, TabId, TabKind};
use crate::vanilla;

/// Generated contents of one tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuiltTab {
    display_items: Vec<ItemStack>,
    search_items: Vec<ItemStack>,
}

impl BuiltTab {
    fn from_sink(sink: OutputSink) -> Self {
        let (display_items, search_items) = sink.into_lists();
        Self {
            display_items,
            search_items,
        }
    }

    /// Stacks browsable in this tab, in generation order.
    pub fn display_items(&self) -> &[ItemStack] {
        &self.display_items
    }

    /// Stacks this tab contributes to the search index, in generation order.
    pub fn search_tab_display_items(&self) -> &[ItemStack] {
        &self.search_items
    }

    pub fn is_empty(&self) -> bool {
        self.display_items.is_empty()
    }
}

/// Immutable result of one rebuild, shared with readers.
#[derive(Debug)]
pub struct BuiltCatalog {
    context: BuildContext,
    tabs: HashMap<TabId, BuiltTab>,
}

impl BuiltCatalog {
    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    pub fn tab(&self, id: &str) -> Option<&BuiltTab> {
        self.tabs.get(id)
    }

    /// The tab's list, or an empty slice for unknown ids.
    pub fn display_items(&self, id: &str) -> &[ItemStack] {
        self.tabs.get(id).map(|t| t.display_items()).unwrap_or(&[])
    }

    pub fn search_tab_display_items(&self, id: &str) -> &[ItemStack] {
        self.tabs
            .get(id)
            .map(|t| t.search_tab_display_items())
            .unwrap_or(&[])
    }

    pub fn total_stacks(&self) -> usize {
        self.tabs.values().map(|t| t.display_items.len()).sum()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CatalogState {
    /// No catalog built yet, or invalidated.
    Stale,
    /// The cached catalog matches the last context seen.
    Fresh,
}

/// Owns the tab layout and the cached catalog built from it.
///
/// The cache is a single `Arc<BuiltCatalog>` swapped under a lock, so readers
/// either see the previous catalog or the complete new one.
pub struct TabCatalog {
    tabs: Vec<TabDescriptor>,
    default_tab: usize,
    built: RwLock<Option<Arc<BuiltCatalog>>>,
    rebuilds: AtomicU64,
}

impl TabCatalog {
    /// Validates the layout eagerly; a broken layout never yields a catalog.
    pub fn new(tabs: Vec<TabDescriptor>, default_tab: &str) -> Result<Self, CatalogError> {
        validate_tabs(&tabs)?;
        let default_tab = tabs
            .iter()
            .position(|t| t.id.as_str() == default_tab)
            .ok_or_else(|| CatalogError::UnknownDefaultTab(TabId::new(default_tab)))?;
        Ok(Self {
            tabs,
            default_tab,
            built: RwLock::new(None),
            rebuilds: AtomicU64::new(0),
        })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(vanilla::standard_tabs(), vanilla::DEFAULT_TAB)
    }

    /// Checks that tab ids and (row, column) positions are unique, and that
    /// only search tabs aggregate the search index.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_tabs(&self.tabs)
    }

    /// Rebuilds every tab unless `ctx` equals the context of the cached
    /// catalog. Returns whether a rebuild ran.
    pub fn try_rebuild(&self, ctx: &BuildContext) -> bool {
        let mut built = self.built.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = built.as_ref() {
            if current.context == *ctx {
                log::debug!("catalog up to date; skipping rebuild");
                return false;
            }
        }
        let catalog = self.build(ctx);
        log::debug!(
            "catalog rebuilt: {} tabs, {} stacks (permissions={}, features={})",
            catalog.tabs.len(),
            catalog.total_stacks(),
            ctx.has_permissions,
            ctx.features.iter().collect::<Vec<_>>().join(",")
        );
        *built = Some(Arc::new(catalog));
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Drops the cached catalog so the next `try_rebuild` always runs.
    pub fn invalidate(&self) {
        *self.built.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn state(&self) -> CatalogState {
        match self
            .built
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(_) => CatalogState::Fresh,
            None => CatalogState::Stale,
        }
    }

    pub fn catalog(&self) -> Option<Arc<BuiltCatalog>> {
        self.built
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds.load(Ordering::Relaxed)
    }

    fn build(&self, ctx: &BuildContext) -> BuiltCatalog {
        let mut tabs: HashMap<TabId, BuiltTab> = HashMap::with_capacity(self.tabs.len());
        self.build_category_tabs(ctx, &mut tabs);
        self.build_dependent_tabs(ctx, &mut tabs);
        BuiltCatalog {
            context: ctx.clone(),
            tabs,
        }
    }

    /// Pass one: every category tab.
    fn build_category_tabs(&self, ctx: &BuildContext, built: &mut HashMap<TabId, BuiltTab>) {
        for tab in self.tabs.iter().filter(|t| t.is_category()) {
            let contents = self.run_tab(tab, ctx, built);
            built.insert(tab.id.clone(), contents);
        }
    }

    /// Pass two: every other tab. Search indexes run last so they aggregate
    /// the final lists of all non-search tabs.
    fn build_dependent_tabs(&self, ctx: &BuildContext, built: &mut HashMap<TabId, BuiltTab>) {
        let is_index = |t: &TabDescriptor| matches!(t.contents(), TabContents::SearchIndex);
        let others = self
            .tabs
            .iter()
            .filter(|t| !t.is_category() && !is_index(*t));
        let indexes = self
            .tabs
            .iter()
            .filter(|t| !t.is_category() && is_index(*t));
        for tab in others.chain(indexes) {
            let contents = self.run_tab(tab, ctx, built);
            built.insert(tab.id.clone(), contents);
        }
    }

    fn run_tab(
        &self,
        tab: &TabDescriptor,
        ctx: &BuildContext,
        built: &HashMap<TabId, BuiltTab>,
    ) -> BuiltTab {
        let mut sink = OutputSink::new();
        match tab.contents() {
            TabContents::Empty => {}
            TabContents::Generated(generator) => generator(ctx, &mut sink),
            TabContents::SearchIndex => sink.accept_all(self.search_index(built)),
        }
        log::trace!("tab {} produced {} stacks", tab.id, sink.len());
        BuiltTab::from_sink(sink)
    }

    fn search_index(&self, built: &HashMap<TabId, BuiltTab>) -> ItemSet {
        let mut index = ItemSet::new();
        for tab in self.tabs.iter().filter(|t| t.kind != TabKind::Search) {
            if let Some(contents) = built.get(&tab.id) {
                index.extend(contents.search_tab_display_items().iter().cloned());
            }
        }
        index
    }

    /// All tabs ordered top row first, then by column.
    pub fn all_tabs(&self) -> Vec<&TabDescriptor> {
        let mut tabs: Vec<&TabDescriptor> = self.tabs.iter().collect();
        tabs.sort_by_key(|t| t.position());
        tabs
    }

    /// Tabs shown by default, in layout order.
    pub fn visible_tabs(&self) -> Vec<&TabDescriptor> {
        self.all_tabs()
            .into_iter()
            .filter(|t| t.shown_by_default())
            .collect()
    }

    /// Tabs worth drawing for the current catalog: visible tabs, where a
    /// category tab also needs at least one stack. Operator-only tabs are
    /// included once permissions are granted.
    pub fn displayable_tabs(&self) -> Vec<&TabDescriptor> {
        let catalog = self.catalog();
        let permitted = catalog
            .as_ref()
            .map(|c| c.context.has_permissions)
            .unwrap_or(false);
        self.all_tabs()
            .into_iter()
            .filter(|t| t.shown_by_default() || permitted)
            .filter(|t| {
                !t.is_category()
                    || catalog
                        .as_ref()
                        .and_then(|c| c.tab(t.id.as_str()))
                        .is_some_and(|b| !b.is_empty())
            })
            .collect()
    }

    pub fn tab(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.id.as_str() == id)
    }

    pub fn tab_at(&self, row: Row, column: u32) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.position() == (row, column))
    }

    pub fn search_tab(&self) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.kind == TabKind::Search)
    }

    pub fn default_tab(&self) -> &TabDescriptor {
        &self.tabs[self.default_tab]
    }
}

fn validate_tabs(tabs: &[TabDescriptor]) -> Result<(), CatalogError> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(tabs.len());
    let mut positions: HashMap<(Row, u32), &TabId> = HashMap::with_capacity(tabs.len());
    for tab in tabs {
        if !ids.insert(tab.id.as_str()) {
            return Err(CatalogError::DuplicateId(tab.id.clone()));
        }
        // Any other kind would run before the index is complete.
        if matches!(tab.contents(), TabContents::SearchIndex) && tab.kind != TabKind::Search {
            return Err(CatalogError::SearchIndexKind(tab.id.clone()));
        }
        if let Some(first) = positions.insert(tab.position(), &tab.id) {
            return Err(CatalogError::DuplicatePosition {
                row: tab.row,
                column: tab.column,
                first: first.clone(),
                second: tab.id.clone(),
            });
        }
    }
    Ok(())
}
