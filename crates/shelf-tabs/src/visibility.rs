/// Which output views a generated stack is routed to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Listed in the generating tab only.
    OwnTabOnly,
    /// Listed in the search index only.
    SearchTabOnly,
    #[default]
    OwnAndSearch,
}

impl Visibility {
    #[inline]
    pub fn in_own_tab(self) -> bool {
        matches!(self, Visibility::OwnTabOnly | Visibility::OwnAndSearch)
    }

    #[inline]
    pub fn in_search_tab(self) -> bool {
        matches!(self, Visibility::SearchTabOnly | Visibility::OwnAndSearch)
    }
}
