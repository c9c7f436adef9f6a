use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{
    ContentConfig, EnchantmentDef, InstrumentDef, ItemDef, PaintingVariantDef, PotionDef,
    StewEffectDef,
};
use super::features::FeatureSet;
use super::types::ItemId;

/// One catalog entry of the plain item table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemEntry {
    pub item: ItemId,
    pub group: String,
    pub requires_feature: Option<String>,
    pub operator_only: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Potion {
    pub name: String,
    pub tags: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Enchantment {
    pub name: String,
    pub min_level: u32,
    pub max_level: u32,
    pub tags: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintingVariant {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub tags: BTreeSet<String>,
}

impl PaintingVariant {
    /// Widened so any pair of loaded dimensions fits.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instrument {
    pub name: String,
    pub tags: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StewEffect {
    pub source: ItemId,
    pub effect: String,
    pub duration: u32,
    pub tags: BTreeSet<String>,
}

/// Ordered list of loaded values of one kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegistryTable<T> {
    entries: Vec<T>,
}

impl<T> RegistryTable<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A value kind the registry can enumerate.
pub trait RegistryEntry: Sized + 'static {
    fn table(reg: &ContentRegistry) -> Option<&RegistryTable<Self>>;
    fn tags(&self) -> &BTreeSet<String>;

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(tag)
    }
}

macro_rules! registry_entry {
    ($ty:ty, $field:ident) => {
        impl RegistryEntry for $ty {
            fn table(reg: &ContentRegistry) -> Option<&RegistryTable<Self>> {
                reg.$field.as_ref()
            }
            fn tags(&self) -> &BTreeSet<String> {
                &self.tags
            }
        }
    };
}

registry_entry!(Potion, potions);
registry_entry!(Enchantment, enchantments);
registry_entry!(PaintingVariant, painting_variants);
registry_entry!(Instrument, instruments);
registry_entry!(StewEffect, stew_effects);

/// Snapshot of loaded content. Compared by value; two snapshots with the same
/// tables in the same order are equal.
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRegistry {
    pub items: Option<RegistryTable<ItemEntry>>,
    pub potions: Option<RegistryTable<Potion>>,
    pub enchantments: Option<RegistryTable<Enchantment>>,
    pub painting_variants: Option<RegistryTable<PaintingVariant>>,
    pub instruments: Option<RegistryTable<Instrument>>,
    pub stew_effects: Option<RegistryTable<StewEffect>>,
    pub default_features: FeatureSet,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every loaded value of kind `T`, in load order. Empty when the table is absent.
    pub fn lookup<T: RegistryEntry>(&self) -> impl Iterator<Item = &T> {
        T::table(self).into_iter().flat_map(|t| t.iter())
    }

    pub fn lookup_tagged<'a, T: RegistryEntry>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a T> {
        self.lookup::<T>().filter(move |e| e.has_tag(tag))
    }

    pub fn has<T: RegistryEntry>(&self) -> bool {
        T::table(self).is_some()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemEntry> {
        self.items.iter().flat_map(|t| t.iter())
    }

    pub fn items_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ItemEntry> {
        self.items().filter(move |e| e.group == group)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ContentConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: ContentConfig) -> Result<Self, Box<dyn Error>> {
        let items = cfg
            .items
            .map(|defs| compile_table("item", defs, |d: &ItemDef| d.name.to_string(), compile_item))
            .transpose()?;
        let potions = cfg
            .potions
            .map(|defs| compile_table("potion", defs, |d: &PotionDef| d.name.clone(), compile_potion))
            .transpose()?;
        let enchantments = cfg
            .enchantments
            .map(|defs| {
                compile_table(
                    "enchantment",
                    defs,
                    |d: &EnchantmentDef| d.name.clone(),
                    compile_enchantment,
                )
            })
            .transpose()?;
        let painting_variants = cfg
            .painting_variants
            .map(|defs| {
                compile_table(
                    "painting variant",
                    defs,
                    |d: &PaintingVariantDef| d.name.clone(),
                    compile_painting,
                )
            })
            .transpose()?;
        let instruments = cfg
            .instruments
            .map(|defs| {
                compile_table(
                    "instrument",
                    defs,
                    |d: &InstrumentDef| d.name.clone(),
                    compile_instrument,
                )
            })
            .transpose()?;
        // Several sources may carry the same effect; uniqueness is per source.
        let stew_effects = cfg
            .stew_effects
            .map(|defs| {
                compile_table(
                    "stew effect source",
                    defs,
                    |d: &StewEffectDef| d.source.to_string(),
                    compile_stew_effect,
                )
            })
            .transpose()?;
        Ok(ContentRegistry {
            items,
            potions,
            enchantments,
            painting_variants,
            instruments,
            stew_effects,
            default_features: cfg.default_features,
        })
    }
}

fn compile_table<D, T>(
    what: &str,
    defs: Vec<D>,
    key: impl Fn(&D) -> String,
    compile: impl Fn(D) -> Result<T, Box<dyn Error>>,
) -> Result<RegistryTable<T>, Box<dyn Error>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(defs.len());
    let mut entries = Vec::with_capacity(defs.len());
    for def in defs {
        let k = key(&def);
        if !seen.insert(k.clone()) {
            return Err(format!("duplicate {} `{}`", what, k).into());
        }
        entries.push(compile(def)?);
    }
    Ok(RegistryTable::new(entries))
}

fn compile_item(def: ItemDef) -> Result<ItemEntry, Box<dyn Error>> {
    Ok(ItemEntry {
        item: def.name,
        group: def.group,
        requires_feature: def.requires_feature,
        operator_only: def.operator_only.unwrap_or(false),
    })
}

fn compile_potion(def: PotionDef) -> Result<Potion, Box<dyn Error>> {
    Ok(Potion {
        name: def.name,
        tags: def.tags.into_iter().collect(),
    })
}

fn compile_enchantment(def: EnchantmentDef) -> Result<Enchantment, Box<dyn Error>> {
    let min_level = def.min_level.unwrap_or(1);
    let max_level = def.max_level.unwrap_or(min_level);
    if max_level < min_level {
        return Err(format!(
            "enchantment `{}` has max_level {} below min_level {}",
            def.name, max_level, min_level
        )
        .into());
    }
    Ok(Enchantment {
        name: def.name,
        min_level,
        max_level,
        tags: def.tags.into_iter().collect(),
    })
}

fn compile_painting(def: PaintingVariantDef) -> Result<PaintingVariant, Box<dyn Error>> {
    if def.width == 0 || def.height == 0 {
        return Err(format!("painting variant `{}` has an empty size", def.name).into());
    }
    Ok(PaintingVariant {
        name: def.name,
        width: def.width,
        height: def.height,
        tags: def.tags.into_iter().collect(),
    })
}

fn compile_instrument(def: InstrumentDef) -> Result<Instrument, Box<dyn Error>> {
    Ok(Instrument {
        name: def.name,
        tags: def.tags.into_iter().collect(),
    })
}

fn compile_stew_effect(def: StewEffectDef) -> Result<StewEffect, Box<dyn Error>> {
    Ok(StewEffect {
        source: def.source,
        effect: def.effect,
        duration: def.duration,
        tags: def.tags.into_iter().collect(),
    })
}
