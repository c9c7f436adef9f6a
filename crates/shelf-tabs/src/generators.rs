//! Content generators. Each expands registry values into concrete stacks and
//! writes them to the sink it is given. A registry table that is not loaded
//! simply yields no stacks.

use std::collections::BTreeMap;

use shelf_items::registry::{Enchantment, Instrument, PaintingVariant, Potion, StewEffect};
use shelf_items::{DataValue, ItemStack};

use crate::context::BuildContext;
use crate::sink::{ItemSet, OutputSink};
use crate::visibility::Visibility;

pub const FIREWORK_FLIGHT_DURATIONS: [u32; 3] = [1, 2, 3];
pub const OMINOUS_BOTTLE_AMPLIFIERS: std::ops::RangeInclusive<u32> = 0..=4;
pub const MAX_LIGHT_LEVEL: u32 = 15;

pub const POTION_BASES: [&str; 3] = ["potion", "splash_potion", "lingering_potion"];

const OPERATOR_ITEMS: [&str; 9] = [
    "command_block",
    "chain_command_block",
    "repeating_command_block",
    "command_block_minecart",
    "jigsaw",
    "structure_block",
    "structure_void",
    "barrier",
    "debug_stick",
];

/// Every registry item listed under `group`, in registry order.
///
/// Items that require a disabled feature are skipped, as are operator-only
/// items when the context lacks permissions.
pub fn group_items(ctx: &BuildContext, out: &mut OutputSink, group: &str) {
    for entry in ctx.registry.items_in_group(group) {
        if let Some(feature) = entry.requires_feature.as_deref() {
            if !ctx.feature_enabled(feature) {
                continue;
            }
        }
        if entry.operator_only && !ctx.has_permissions {
            continue;
        }
        out.accept(ItemStack::new(entry.item.clone()));
    }
}

/// Emits `stack` only while `feature` is enabled.
pub fn feature_gated(ctx: &BuildContext, out: &mut OutputSink, feature: &str, stack: ItemStack) {
    if ctx.feature_enabled(feature) {
        out.accept(stack);
    }
}

/// One `base` stack per loaded potion.
pub fn potions(ctx: &BuildContext, out: &mut OutputSink, base: &str, visibility: Visibility) {
    for potion in ctx.registry.lookup::<Potion>() {
        out.accept_with(
            ItemStack::with_data(base, "potion_contents", potion.name.as_str()),
            visibility,
        );
    }
}

pub fn enchanted_book(enchantment: &Enchantment, level: u32) -> ItemStack {
    let stored = BTreeMap::from([(enchantment.name.clone(), DataValue::from(level))]);
    ItemStack::with_data("enchanted_book", "stored_enchantments", stored)
}

/// Every level of one enchantment, `min_level..=max_level`.
pub fn enchantment_levels(enchantment: &Enchantment, out: &mut OutputSink, visibility: Visibility) {
    for level in enchantment.min_level..=enchantment.max_level {
        out.accept_with(enchanted_book(enchantment, level), visibility);
    }
}

/// Only the top level of one enchantment.
pub fn enchantment_max_level(
    enchantment: &Enchantment,
    out: &mut OutputSink,
    visibility: Visibility,
) {
    out.accept_with(enchanted_book(enchantment, enchantment.max_level), visibility);
}

pub fn enchanted_books_all_levels(ctx: &BuildContext, out: &mut OutputSink, visibility: Visibility) {
    for enchantment in ctx.registry.lookup::<Enchantment>() {
        enchantment_levels(enchantment, out, visibility);
    }
}

pub fn enchanted_books_max_level(ctx: &BuildContext, out: &mut OutputSink, visibility: Visibility) {
    for enchantment in ctx.registry.lookup::<Enchantment>() {
        enchantment_max_level(enchantment, out, visibility);
    }
}

pub fn painting_data(variant: &PaintingVariant) -> DataValue {
    DataValue::Compound(BTreeMap::from([
        ("asset_id".to_string(), DataValue::from(variant.name.as_str())),
        ("width".to_string(), DataValue::from(variant.width)),
        ("height".to_string(), DataValue::from(variant.height)),
    ]))
}

/// Paintings whose variant passes `filter`, smallest area first and narrower
/// first on equal area. Each stack carries the full variant, not just its name.
pub fn paintings(
    ctx: &BuildContext,
    out: &mut OutputSink,
    filter: impl Fn(&PaintingVariant) -> bool,
    visibility: Visibility,
) {
    let mut variants: Vec<&PaintingVariant> = ctx
        .registry
        .lookup::<PaintingVariant>()
        .filter(|v| filter(v))
        .collect();
    variants.sort_by_key(|v| (v.area(), v.width));
    for variant in variants {
        out.accept_with(
            ItemStack::with_data("painting", "painting_variant", painting_data(variant)),
            visibility,
        );
    }
}

pub fn goat_horns(ctx: &BuildContext, out: &mut OutputSink, visibility: Visibility) {
    for instrument in ctx.registry.lookup::<Instrument>() {
        out.accept_with(
            ItemStack::with_data("goat_horn", "instrument", instrument.name.as_str()),
            visibility,
        );
    }
}

/// One stew per distinct effect. Sources sharing an effect collapse to a
/// single stack.
pub fn suspicious_stews(ctx: &BuildContext, out: &mut OutputSink, visibility: Visibility) {
    let stews: ItemSet = ctx
        .registry
        .lookup::<StewEffect>()
        .map(|e| {
            let effect = DataValue::Compound(BTreeMap::from([
                ("id".to_string(), DataValue::from(e.effect.as_str())),
                ("duration".to_string(), DataValue::from(e.duration)),
            ]));
            ItemStack::with_data("suspicious_stew", "effects", vec![effect])
        })
        .collect();
    out.accept_all_with(stews, visibility);
}

pub fn fireworks(out: &mut OutputSink, visibility: Visibility) {
    for flight in FIREWORK_FLIGHT_DURATIONS {
        out.accept_with(
            ItemStack::with_data("firework_rocket", "flight_duration", flight),
            visibility,
        );
    }
}

pub fn ominous_bottles(out: &mut OutputSink, visibility: Visibility) {
    for amplifier in OMINOUS_BOTTLE_AMPLIFIERS {
        out.accept_with(
            ItemStack::with_data("ominous_bottle", "amplifier", amplifier),
            visibility,
        );
    }
}

/// Light blocks from the brightest level down to zero.
pub fn light_blocks(out: &mut OutputSink, visibility: Visibility) {
    for level in (0..=MAX_LIGHT_LEVEL).rev() {
        out.accept_with(ItemStack::with_data("light", "level", level), visibility);
    }
}

/// Operator utilities. Nothing is produced without permissions.
pub fn operator_blocks(ctx: &BuildContext, out: &mut OutputSink) {
    if !ctx.has_permissions {
        return;
    }
    for name in OPERATOR_ITEMS {
        out.accept(ItemStack::new(name));
    }
    light_blocks(out, Visibility::OwnAndSearch);
    group_items(ctx, out, "op_blocks");
    paintings(
        ctx,
        out,
        |v| !v.tags.contains("placeable"),
        Visibility::OwnTabOnly,
    );
}
