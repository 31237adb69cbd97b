//! Bidirectional color registry: name -> color and color -> name.
//!
//! Both maps live behind a single `RwLock`, so a reader never sees one
//! side of a `put` without the other. Lookups and nearest-match scans take
//! the read lock; `put` and bulk loads take the write lock.
//!
//! Names are lowercased on every insert and lookup. Many names may share
//! a color ("aqua" and "cyan"); the reverse map then holds whichever name
//! was inserted last, which is why the two maps can differ in size.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::builtin::{BUILTIN_COLORS, NamedColor};
use crate::color::Color;
use crate::config::{ColorEntry, RegistryConfig};

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// The two mappings guarded together.
///
/// The reverse map is ordered so full scans visit entries in a fixed order.
#[derive(Debug, Default)]
pub(crate) struct Maps {
    pub(crate) by_name: HashMap<String, Color>,
    pub(crate) by_color: BTreeMap<Color, String>,
}

impl Maps {
    /// Insert an already-lowercased name. Returns the name's previous color.
    fn insert(&mut self, name: String, color: Color) -> Option<Color> {
        let previous = self.by_name.insert(name.clone(), color);
        self.by_color.insert(color, name);
        previous
    }
}

// ---------------------------------------------------------------------------
// ColorRegistry
// ---------------------------------------------------------------------------

/// A thread-safe color name registry.
///
/// Construct one per consumer (tests, embedded palettes) or use the
/// process-wide instance from [`crate::global`].
pub struct ColorRegistry {
    maps: RwLock<Maps>,
}

impl std::fmt::Debug for ColorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (names, values) = self.size();
        f.debug_struct("ColorRegistry")
            .field("names", &names)
            .field("values", &values)
            .finish()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ColorRegistry {
    /// A registry with no names at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            maps: RwLock::new(Maps::default()),
        }
    }

    /// A registry seeded with the built-in table.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        registry.initialize(BUILTIN_COLORS);
        registry
    }

    /// Build a registry from configuration: the built-in table when
    /// enabled, then each configured color in order.
    pub fn from_config(config: &RegistryConfig) -> crate::Result<Self> {
        config.validate()?;
        let registry = if config.builtins {
            Self::with_builtins()
        } else {
            Self::empty()
        };
        for ColorEntry { name, value } in &config.colors {
            registry.put(name, value.to_color()?);
        }
        Ok(registry)
    }

    fn read(&self) -> RwLockReadGuard<'_, Maps> {
        self.maps.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Maps> {
        self.maps.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` against a consistent view of both maps.
    pub(crate) fn read_with<R>(&self, f: impl FnOnce(&Maps) -> R) -> R {
        let guard = self.read();
        f(&guard)
    }

    /// Bulk load `table` under a single write lock, in table order.
    ///
    /// Loading the same table again overwrites every entry with the same
    /// value, so repeated calls leave lookups unchanged.
    pub fn initialize(&self, table: &[NamedColor]) {
        let (names, values) = {
            let mut maps = self.write();
            for (name, color) in table {
                maps.insert(name.to_lowercase(), *color);
            }
            (maps.by_name.len(), maps.by_color.len())
        };
        tracing::info!(
            table_len = table.len(),
            names,
            values,
            "Loaded color table"
        );
    }

    /// Reload the built-in table.
    pub fn load_builtins(&self) {
        self.initialize(BUILTIN_COLORS);
    }

    /// Add or override a color. Both maps are updated under one write lock.
    ///
    /// If `color` was already reachable through another name, reverse
    /// lookup now yields `name` instead.
    pub fn put(&self, name: &str, color: Color) {
        let name = name.to_lowercase();
        let previous = self.write().insert(name.clone(), color);
        match previous {
            Some(old) if old != color => {
                tracing::debug!(name = %name, old = %old, new = %color, "Color overridden");
            }
            Some(_) => {}
            None => tracing::debug!(name = %name, color = %color, "Color added"),
        }
    }

    /// Exact, case-insensitive name lookup.
    pub fn get_by_name(&self, name: &str) -> Option<Color> {
        let name = name.to_lowercase();
        self.read().by_name.get(&name).copied()
    }

    /// Exact reverse lookup, alpha included.
    pub fn get_by_color(&self, color: Color) -> Option<String> {
        self.read().by_color.get(&color).cloned()
    }

    /// True if `name` (any casing) is registered.
    pub fn contains_name(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    /// `(name_count, value_count)`. These differ whenever names share a color.
    pub fn size(&self) -> (usize, usize) {
        let maps = self.read();
        (maps.by_name.len(), maps.by_color.len())
    }

    /// Snapshot of every `(name, color)` pair, sorted by name.
    pub fn entries(&self) -> Vec<(String, Color)> {
        let mut entries: Vec<(String, Color)> = self
            .read()
            .by_name
            .iter()
            .map(|(name, color)| (name.clone(), *color))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
