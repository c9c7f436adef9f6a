use indexmap::IndexSet;
use shelf_items::ItemStack;

use crate::visibility::Visibility;

/// Insertion-ordered set of stacks. Two stacks collapse when their item and
/// data compare equal; the first occurrence keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet(IndexSet<ItemStack>);

impl ItemSet {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Returns false when an equal stack was already present.
    pub fn insert(&mut self, stack: ItemStack) -> bool {
        self.0.insert(stack)
    }

    pub fn contains(&self, stack: &ItemStack) -> bool {
        self.0.contains(stack)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, ItemStack> {
        self.0.iter()
    }
}

impl Extend<ItemStack> for ItemSet {
    fn extend<I: IntoIterator<Item = ItemStack>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<ItemStack> for ItemSet {
    fn from_iter<I: IntoIterator<Item = ItemStack>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ItemSet {
    type Item = ItemStack;
    type IntoIter = indexmap::set::IntoIter<ItemStack>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a ItemStack;
    type IntoIter = indexmap::set::Iter<'a, ItemStack>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Append-only accumulator handed to one tab generator per build.
#[derive(Debug, Default)]
pub struct OutputSink {
    entries: Vec<(ItemStack, Visibility)>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `stack` routed to both the tab and the search index.
    pub fn accept(&mut self, stack: ItemStack) {
        self.accept_with(stack, Visibility::OwnAndSearch);
    }

    pub fn accept_with(&mut self, stack: ItemStack, visibility: Visibility) {
        self.entries.push((stack, visibility));
    }

    /// Appends every stack in iteration order. Passing an [`ItemSet`] means
    /// duplicates were already collapsed.
    pub fn accept_all<I: IntoIterator<Item = ItemStack>>(&mut self, stacks: I) {
        self.accept_all_with(stacks, Visibility::OwnAndSearch);
    }

    pub fn accept_all_with<I: IntoIterator<Item = ItemStack>>(
        &mut self,
        stacks: I,
        visibility: Visibility,
    ) {
        self.entries
            .extend(stacks.into_iter().map(|stack| (stack, visibility)));
    }

    pub fn entries(&self) -> &[(ItemStack, Visibility)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stacks browsable in the generating tab, in insertion order.
    pub fn display_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.entries
            .iter()
            .filter(|(_, v)| v.in_own_tab())
            .map(|(s, _)| s)
    }

    /// Stacks destined for the search index, in insertion order.
    pub fn search_tab_display_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.entries
            .iter()
            .filter(|(_, v)| v.in_search_tab())
            .map(|(s, _)| s)
    }

    /// Splits the accepted entries into the tab list and the search list.
    pub(crate) fn into_lists(self) -> (Vec<ItemStack>, Vec<ItemStack>) {
        let mut display = Vec::with_capacity(self.entries.len());
        let mut search = Vec::with_capacity(self.entries.len());
        for (stack, visibility) in self.entries {
            match visibility {
                Visibility::OwnTabOnly => display.push(stack),
                Visibility::SearchTabOnly => search.push(stack),
                Visibility::OwnAndSearch => {
                    search.push(stack.clone());
                    display.push(stack);
                }
            }
        }
        (display, search)
    }
}
