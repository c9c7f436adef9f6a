use std::sync::Arc;

use shelf_items::{ContentRegistry, DataValue, FeatureSet, ItemStack};
use shelf_tabs::vanilla;
use shelf_tabs::{
    BuildContext, BuiltCatalog, CatalogError, CatalogState, Row, TabCatalog, TabDescriptor,
    TabKind, Visibility,
};

fn stack(name: &str) -> ItemStack {
    ItemStack::new(name)
}

fn ctx(has_permissions: bool) -> BuildContext {
    BuildContext::new(FeatureSet::new(), has_permissions, Arc::new(ContentRegistry::new()))
}

// Category tab emitting [A, B], permission-gated tab emitting [C] for its own list only.
fn scenario_catalog() -> TabCatalog {
    let tabs = vec![
        TabDescriptor::builder("blocks", Row::Top, 0)
            .generator(|_, out| {
                out.accept(stack("a"));
                out.accept(stack("b"));
            })
            .build(),
        TabDescriptor::builder("search", Row::Top, 1)
            .search_index()
            .build(),
        TabDescriptor::builder("operator", Row::Bottom, 0)
            .hidden()
            .generator(|ctx, out| {
                if ctx.has_permissions {
                    out.accept_with(stack("c"), Visibility::OwnTabOnly);
                }
            })
            .build(),
    ];
    TabCatalog::new(tabs, "blocks").expect("valid layout")
}

#[test]
fn permission_toggle_rebuilds_gated_tab_only() {
    let catalog = scenario_catalog();
    assert_eq!(catalog.state(), CatalogState::Stale);
    assert!(catalog.try_rebuild(&ctx(false)));
    assert_eq!(catalog.state(), CatalogState::Fresh);

    let built = catalog.catalog().unwrap();
    assert!(built.display_items("operator").is_empty());
    assert_eq!(built.display_items("search"), &[stack("a"), stack("b")]);

    assert!(catalog.try_rebuild(&ctx(true)));
    let built = catalog.catalog().unwrap();
    assert_eq!(built.display_items("operator"), &[stack("c")]);
    assert_eq!(built.display_items("search"), &[stack("a"), stack("b")]);
}

#[test]
fn equal_context_hits_cache_and_keeps_same_catalog() {
    let catalog = scenario_catalog();
    assert!(catalog.try_rebuild(&ctx(false)));
    let first = catalog.catalog().unwrap();
    // A separately constructed but value-equal context still hits.
    assert!(!catalog.try_rebuild(&ctx(false)));
    let second = catalog.catalog().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.rebuild_count(), 1);
}

#[test]
fn each_context_field_triggers_rebuild() {
    let catalog = scenario_catalog();
    let base = ctx(false);
    assert!(catalog.try_rebuild(&base));

    let features = base.with_features(FeatureSet::new().with("bundle"));
    assert!(catalog.try_rebuild(&features));

    let registry = ContentRegistry::from_toml_str("[[potions]]\nname = \"water\"\n").unwrap();
    let with_registry = features.with_registry(Arc::new(registry));
    assert!(catalog.try_rebuild(&with_registry));

    assert!(catalog.try_rebuild(&with_registry.with_permissions(true)));
    assert_eq!(catalog.rebuild_count(), 4);
}

fn potion_stacks<'a>(built: &'a BuiltCatalog, tab: &str) -> Vec<&'a ItemStack> {
    built
        .display_items(tab)
        .iter()
        .filter(|s| s.get("potion_contents").is_some())
        .collect()
}

#[test]
fn context_changes_show_up_in_standard_catalog() {
    let catalog = TabCatalog::standard().unwrap();
    let base = ctx(false);
    assert!(catalog.try_rebuild(&base));
    let built = catalog.catalog().unwrap();
    assert!(!built.display_items(vanilla::TOOLS_AND_UTILITIES).contains(&stack("bundle")));
    assert!(potion_stacks(&built, vanilla::COMBAT).is_empty());

    let bundled = base.with_features(FeatureSet::new().with("bundle"));
    assert!(catalog.try_rebuild(&bundled));
    let built = catalog.catalog().unwrap();
    assert!(built.display_items(vanilla::TOOLS_AND_UTILITIES).contains(&stack("bundle")));
    assert!(built.display_items(vanilla::SEARCH).contains(&stack("bundle")));

    let registry = ContentRegistry::from_toml_str("[[potions]]\nname = \"water\"\n").unwrap();
    let watered = bundled.with_registry(Arc::new(registry));
    assert!(catalog.try_rebuild(&watered));
    let built = catalog.catalog().unwrap();
    let water_arrow = ItemStack::with_data("tipped_arrow", "potion_contents", "water");
    assert_eq!(potion_stacks(&built, vanilla::COMBAT), vec![&water_arrow]);
    assert_eq!(potion_stacks(&built, vanilla::FOOD_AND_DRINKS).len(), 3);
    assert!(built.display_items(vanilla::SEARCH).contains(&water_arrow));

    let registry = ContentRegistry::from_toml_str("[[potions]]\nname = \"healing\"\n").unwrap();
    assert!(catalog.try_rebuild(&watered.with_registry(Arc::new(registry))));
    let built = catalog.catalog().unwrap();
    let healing_arrow = ItemStack::with_data("tipped_arrow", "potion_contents", "healing");
    assert_eq!(potion_stacks(&built, vanilla::COMBAT), vec![&healing_arrow]);
    assert!(!built.display_items(vanilla::SEARCH).contains(&water_arrow));
    assert!(built.display_items(vanilla::SEARCH).contains(&healing_arrow));
}

#[test]
fn oversized_painting_sorts_after_small_one() {
    let catalog = TabCatalog::standard().unwrap();
    let registry = ContentRegistry::from_toml_str(
        r#"
        [[painting_variants]]
        name = "mural"
        width = 70000
        height = 70000
        tags = ["placeable"]

        [[painting_variants]]
        name = "kebab"
        width = 1
        height = 1
        tags = ["placeable"]
    "#,
    )
    .unwrap();
    assert!(catalog.try_rebuild(&BuildContext::new(
        FeatureSet::new(),
        false,
        Arc::new(registry),
    )));
    let built = catalog.catalog().unwrap();
    let names: Vec<String> = built
        .display_items(vanilla::FUNCTIONAL_BLOCKS)
        .iter()
        .filter_map(|s| s.get("painting_variant"))
        .map(|v| match v {
            DataValue::Compound(map) => map["asset_id"].to_string(),
            other => other.to_string(),
        })
        .collect();
    assert_eq!(names, vec!["\"kebab\"", "\"mural\""]);
}

#[test]
fn invalidate_forces_next_rebuild() {
    let catalog = scenario_catalog();
    assert!(catalog.try_rebuild(&ctx(false)));
    catalog.invalidate();
    assert_eq!(catalog.state(), CatalogState::Stale);
    assert!(catalog.catalog().is_none());
    assert!(catalog.try_rebuild(&ctx(false)));
}

#[test]
fn visibility_routes_between_tab_and_search() {
    let tabs = vec![
        TabDescriptor::builder("search", Row::Top, 0)
            .search_index()
            .build(),
        TabDescriptor::builder("mixed", Row::Top, 1)
            .generator(|_, out| {
                out.accept_with(stack("own"), Visibility::OwnTabOnly);
                out.accept_with(stack("hidden"), Visibility::SearchTabOnly);
                out.accept(stack("both"));
            })
            .build(),
    ];
    let catalog = TabCatalog::new(tabs, "mixed").unwrap();
    catalog.try_rebuild(&ctx(false));
    let built = catalog.catalog().unwrap();
    assert_eq!(built.display_items("mixed"), &[stack("own"), stack("both")]);
    assert_eq!(built.display_items("search"), &[stack("hidden"), stack("both")]);
}

#[test]
fn search_index_deduplicates_across_tabs_in_first_seen_order() {
    let tabs = vec![
        TabDescriptor::builder("first", Row::Top, 0)
            .generator(|_, out| out.accept_all(vec![stack("x"), stack("y")]))
            .build(),
        TabDescriptor::builder("second", Row::Top, 1)
            .generator(|_, out| out.accept_all(vec![stack("y"), stack("z"), stack("x")]))
            .build(),
        TabDescriptor::builder("search", Row::Top, 2)
            .search_index()
            .build(),
    ];
    let catalog = TabCatalog::new(tabs, "first").unwrap();
    catalog.try_rebuild(&ctx(false));
    let built = catalog.catalog().unwrap();
    assert_eq!(
        built.display_items("search"),
        &[stack("x"), stack("y"), stack("z")]
    );
    // The tabs themselves keep their own duplicates untouched.
    assert_eq!(built.display_items("second").len(), 3);
}

#[test]
fn search_registered_before_categories_still_sees_them() {
    let tabs = vec![
        TabDescriptor::builder("search", Row::Top, 0)
            .search_index()
            .build(),
        TabDescriptor::builder("hotbar", Row::Top, 1)
            .kind(TabKind::Hotbar)
            .generator(|_, out| out.accept(stack("saved")))
            .build(),
        TabDescriptor::builder("blocks", Row::Bottom, 0)
            .generator(|_, out| out.accept(stack("stone")))
            .build(),
    ];
    let catalog = TabCatalog::new(tabs, "blocks").unwrap();
    catalog.try_rebuild(&ctx(false));
    let built = catalog.catalog().unwrap();
    assert_eq!(
        built.display_items("search"),
        &[stack("saved"), stack("stone")]
    );
}

#[test]
fn constructing_with_shared_position_fails() {
    let tabs = vec![
        TabDescriptor::builder("a", Row::Bottom, 3).build(),
        TabDescriptor::builder("b", Row::Bottom, 3).build(),
    ];
    match TabCatalog::new(tabs, "a") {
        Err(CatalogError::DuplicatePosition { first, second, .. }) => {
            assert_eq!(first.as_str(), "a");
            assert_eq!(second.as_str(), "b");
        }
        other => panic!("expected duplicate position, got {:?}", other.err()),
    }
}

#[test]
fn standard_layout_is_valid_and_ordered() {
    let catalog = TabCatalog::standard().expect("standard layout");
    catalog.validate().expect("validate");
    let ids: Vec<&str> = catalog.all_tabs().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            vanilla::BUILDING_BLOCKS,
            vanilla::COLORED_BLOCKS,
            vanilla::NATURAL_BLOCKS,
            vanilla::FUNCTIONAL_BLOCKS,
            vanilla::REDSTONE_BLOCKS,
            vanilla::HOTBAR,
            vanilla::SEARCH,
            vanilla::TOOLS_AND_UTILITIES,
            vanilla::COMBAT,
            vanilla::FOOD_AND_DRINKS,
            vanilla::INGREDIENTS,
            vanilla::SPAWN_EGGS,
            vanilla::OP_BLOCKS,
            vanilla::INVENTORY,
        ]
    );
    let visible: Vec<&str> = catalog
        .visible_tabs()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert!(!visible.contains(&vanilla::OP_BLOCKS));
    assert_eq!(visible.len(), 13);
    assert_eq!(catalog.default_tab().id.as_str(), vanilla::BUILDING_BLOCKS);
    assert_eq!(catalog.search_tab().unwrap().id.as_str(), vanilla::SEARCH);

    let inventory = catalog.tab(vanilla::INVENTORY).unwrap();
    assert!(inventory.hide_title && inventory.no_scroll_bar && inventory.aligned_right);
    assert_eq!(catalog.tab_at(Row::Top, 5).unwrap().kind, TabKind::Hotbar);
}

#[test]
fn displayable_tabs_skip_empty_categories() {
    let catalog = TabCatalog::standard().unwrap();
    let registry = ContentRegistry::from_toml_str(
        r#"
        [[items]]
        name = "stone"
        group = "building_blocks"
    "#,
    )
    .unwrap();
    catalog.try_rebuild(&BuildContext::new(
        FeatureSet::new(),
        false,
        Arc::new(registry),
    ));
    let shown: Vec<&str> = catalog
        .displayable_tabs()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert!(shown.contains(&vanilla::BUILDING_BLOCKS));
    assert!(!shown.contains(&vanilla::COLORED_BLOCKS));
    assert!(!shown.contains(&vanilla::OP_BLOCKS));
    // Fixed enumerations keep these populated without registry content.
    assert!(shown.contains(&vanilla::TOOLS_AND_UTILITIES));
    assert!(shown.contains(&vanilla::FOOD_AND_DRINKS));
    assert!(shown.contains(&vanilla::SEARCH));
    assert!(shown.contains(&vanilla::INVENTORY));
}

#[test]
fn operator_tab_is_empty_without_permissions() {
    let catalog = TabCatalog::standard().unwrap();
    let base = ctx(false);
    catalog.try_rebuild(&base);
    let built = catalog.catalog().unwrap();
    assert!(built.display_items(vanilla::OP_BLOCKS).is_empty());
    assert!(
        !built
            .display_items(vanilla::SEARCH)
            .iter()
            .any(|s| s.is("command_block"))
    );

    catalog.try_rebuild(&base.with_permissions(true));
    let built = catalog.catalog().unwrap();
    assert!(built.display_items(vanilla::OP_BLOCKS)[0].is("command_block"));
    assert!(
        built
            .display_items(vanilla::SEARCH)
            .iter()
            .any(|s| s.is("command_block"))
    );
    assert!(
        catalog
            .displayable_tabs()
            .iter()
            .any(|t| t.id.as_str() == vanilla::OP_BLOCKS)
    );
}
