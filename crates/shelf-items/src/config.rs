use serde::Deserialize;

use super::features::FeatureSet;
use super::types::ItemId;

// Top-level content file. Every table is optional; an omitted table means the
// corresponding registry lookup yields nothing.
#[derive(Deserialize, Debug, Default)]
pub struct ContentConfig {
    // Features enabled when the caller does not choose any explicitly
    #[serde(default)]
    pub default_features: FeatureSet,
    #[serde(default)]
    pub items: Option<Vec<ItemDef>>,
    #[serde(default)]
    pub potions: Option<Vec<PotionDef>>,
    #[serde(default)]
    pub enchantments: Option<Vec<EnchantmentDef>>,
    #[serde(default)]
    pub painting_variants: Option<Vec<PaintingVariantDef>>,
    #[serde(default)]
    pub instruments: Option<Vec<InstrumentDef>>,
    #[serde(default)]
    pub stew_effects: Option<Vec<StewEffectDef>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ItemDef {
    pub name: ItemId,
    // Catalog group (tab id) the item is listed under
    pub group: String,
    // Only listed while this feature is enabled
    #[serde(default)]
    pub requires_feature: Option<String>,
    // Only listed for players with operator permissions
    #[serde(default)]
    pub operator_only: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PotionDef {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnchantmentDef {
    pub name: String,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub max_level: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PaintingVariantDef {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InstrumentDef {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// Suspicious effect carried by a flower-like source item
#[derive(Deserialize, Debug, Clone)]
pub struct StewEffectDef {
    pub source: ItemId,
    pub effect: String,
    #[serde(default = "default_stew_duration")]
    pub duration: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_stew_duration() -> u32 {
    160
}
