//! Standard tab layout.

use shelf_items::ItemStack;

use crate::generators;
use crate::tab::{Row, TabDescriptor, TabKind};
use crate::visibility::Visibility;

pub const BUILDING_BLOCKS: &str = "building_blocks";
pub const COLORED_BLOCKS: &str = "colored_blocks";
pub const NATURAL_BLOCKS: &str = "natural_blocks";
pub const FUNCTIONAL_BLOCKS: &str = "functional_blocks";
pub const REDSTONE_BLOCKS: &str = "redstone_blocks";
pub const HOTBAR: &str = "hotbar";
pub const SEARCH: &str = "search";
pub const TOOLS_AND_UTILITIES: &str = "tools_and_utilities";
pub const COMBAT: &str = "combat";
pub const FOOD_AND_DRINKS: &str = "food_and_drinks";
pub const INGREDIENTS: &str = "ingredients";
pub const SPAWN_EGGS: &str = "spawn_eggs";
pub const OP_BLOCKS: &str = "op_blocks";
pub const INVENTORY: &str = "inventory";

/// Fallback selection when no tab is chosen.
pub const DEFAULT_TAB: &str = BUILDING_BLOCKS;

fn group_tab(id: &'static str, row: Row, column: u32, icon: &'static str) -> TabDescriptor {
    TabDescriptor::builder(id, row, column)
        .icon(move || ItemStack::new(icon))
        .generator(move |ctx, out| generators::group_items(ctx, out, id))
        .build()
}

pub fn standard_tabs() -> Vec<TabDescriptor> {
    vec![
        group_tab(BUILDING_BLOCKS, Row::Top, 0, "bricks"),
        group_tab(COLORED_BLOCKS, Row::Top, 1, "cyan_wool"),
        group_tab(NATURAL_BLOCKS, Row::Top, 2, "grass_block"),
        TabDescriptor::builder(FUNCTIONAL_BLOCKS, Row::Top, 3)
            .icon(|| ItemStack::new("oak_sign"))
            .generator(|ctx, out| {
                generators::group_items(ctx, out, FUNCTIONAL_BLOCKS);
                out.accept(ItemStack::new("painting"));
                generators::paintings(
                    ctx,
                    out,
                    |v| v.tags.contains("placeable"),
                    Visibility::OwnAndSearch,
                );
            })
            .build(),
        group_tab(REDSTONE_BLOCKS, Row::Top, 4, "redstone"),
        TabDescriptor::builder(HOTBAR, Row::Top, 5)
            .kind(TabKind::Hotbar)
            .aligned_right()
            .icon(|| ItemStack::new("bookshelf"))
            .build(),
        TabDescriptor::builder(SEARCH, Row::Top, 6)
            .search_index()
            .aligned_right()
            .icon(|| ItemStack::new("compass"))
            .build(),
        TabDescriptor::builder(TOOLS_AND_UTILITIES, Row::Bottom, 0)
            .icon(|| ItemStack::new("diamond_pickaxe"))
            .generator(|ctx, out| {
                generators::group_items(ctx, out, TOOLS_AND_UTILITIES);
                generators::feature_gated(ctx, out, "bundle", ItemStack::new("bundle"));
                generators::goat_horns(ctx, out, Visibility::OwnAndSearch);
                generators::fireworks(out, Visibility::OwnAndSearch);
            })
            .build(),
        TabDescriptor::builder(COMBAT, Row::Bottom, 1)
            .icon(|| ItemStack::new("netherite_sword"))
            .generator(|ctx, out| {
                generators::group_items(ctx, out, COMBAT);
                generators::potions(ctx, out, "tipped_arrow", Visibility::OwnAndSearch);
            })
            .build(),
        TabDescriptor::builder(FOOD_AND_DRINKS, Row::Bottom, 2)
            .icon(|| ItemStack::new("golden_apple"))
            .generator(|ctx, out| {
                generators::group_items(ctx, out, FOOD_AND_DRINKS);
                generators::suspicious_stews(ctx, out, Visibility::OwnAndSearch);
                for base in generators::POTION_BASES {
                    generators::potions(ctx, out, base, Visibility::OwnAndSearch);
                }
                generators::ominous_bottles(out, Visibility::OwnAndSearch);
            })
            .build(),
        TabDescriptor::builder(INGREDIENTS, Row::Bottom, 3)
            .icon(|| ItemStack::new("iron_ingot"))
            .generator(|ctx, out| {
                generators::group_items(ctx, out, INGREDIENTS);
                generators::enchanted_books_max_level(ctx, out, Visibility::OwnTabOnly);
                generators::enchanted_books_all_levels(ctx, out, Visibility::SearchTabOnly);
            })
            .build(),
        group_tab(SPAWN_EGGS, Row::Bottom, 4, "pig_spawn_egg"),
        TabDescriptor::builder(OP_BLOCKS, Row::Bottom, 5)
            .hidden()
            .icon(|| ItemStack::new("command_block"))
            .generator(generators::operator_blocks)
            .build(),
        TabDescriptor::builder(INVENTORY, Row::Bottom, 6)
            .kind(TabKind::Inventory)
            .hide_title()
            .aligned_right()
            .no_scroll_bar()
            .icon(|| ItemStack::new("chest"))
            .build(),
    ]
}
