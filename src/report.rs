use shelf_tabs::{Row, TabCatalog, TabKind};

pub struct Selection {
    pub tab: Option<String>,
    pub search: bool,
}

pub fn print(catalog: &TabCatalog, selection: &Selection) {
    let Some(built) = catalog.catalog() else {
        println!("catalog not built");
        return;
    };
    let mut row: Option<Row> = None;
    for tab in catalog.displayable_tabs() {
        if row != Some(tab.row) {
            println!("[{}]", tab.row);
            row = Some(tab.row);
        }
        let kind = match tab.kind {
            TabKind::Category => "",
            TabKind::Search => " (search)",
            TabKind::Hotbar => " (hotbar)",
            TabKind::Inventory => " (inventory)",
        };
        let marker = if tab.id == catalog.default_tab().id {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:>2} {:<22} {:>4} stacks{}",
            marker,
            tab.column,
            tab.title,
            built.display_items(tab.id.as_str()).len(),
            kind
        );
    }

    if let Some(id) = selection.tab.as_deref() {
        match catalog.tab(id) {
            Some(tab) => {
                println!();
                println!("{} (icon {}):", tab.title, tab.icon());
                for stack in built.display_items(id) {
                    println!("  {}", stack);
                }
            }
            None => log::warn!("unknown tab `{}`", id),
        }
    }
    if selection.search {
        if let Some(search) = catalog.search_tab() {
            println!();
            println!("search index:");
            for stack in built.display_items(search.id.as_str()) {
                println!("  {}", stack);
            }
        }
    }
}
