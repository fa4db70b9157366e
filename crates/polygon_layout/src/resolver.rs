//! Per-component responsive property resolution with a width cache

use crate::breakpoint::BreakpointTable;
use crate::responsive::{resolve_with, ResolveError, ResponsiveValue};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

struct CacheEntry<T> {
    width: u32,
    value: T,
}

/// The responsive properties of one component instance.
///
/// Resolution is a pure function of `(value, width)`; the cache only avoids
/// repeating it. An entry is dropped when its property is reassigned or
/// removed, every entry is dropped when the width changes, and
/// [`invalidate_all`](Self::invalidate_all) clears everything explicitly.
pub struct ResponsiveResolver<T> {
    table: BreakpointTable,
    width: u32,
    properties: BTreeMap<String, ResponsiveValue<T>>,
    cache: FxHashMap<String, CacheEntry<T>>,
}

impl<T: Clone> ResponsiveResolver<T> {
    pub fn new(width: u32) -> Self {
        Self::with_table(width, BreakpointTable::DEFAULT)
    }

    pub fn with_table(width: u32, table: BreakpointTable) -> Self {
        Self {
            table,
            width,
            properties: BTreeMap::new(),
            cache: FxHashMap::default(),
        }
    }

    /// Current viewport width
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Assign a property, replacing any previous value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<ResponsiveValue<T>>) {
        let name = name.into();
        self.cache.remove(&name);
        self.properties.insert(name, value.into());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<ResponsiveValue<T>> {
        self.cache.remove(name);
        self.properties.remove(name)
    }

    pub fn property(&self, name: &str) -> Option<&ResponsiveValue<T>> {
        self.properties.get(name)
    }

    /// Registered property names, sorted
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Effective value of one property at the current width, `None` if the
    /// property is not registered.
    pub fn resolve_property(&mut self, name: &str) -> Result<Option<T>, ResolveError> {
        if let Some(entry) = self.cache.get(name) {
            if entry.width == self.width {
                tracing::trace!(property = name, width = self.width, "responsive cache hit");
                return Ok(Some(entry.value.clone()));
            }
        }

        let Some(value) = self.properties.get(name) else {
            return Ok(None);
        };
        let resolved = resolve_with(value, self.width, &self.table)
            .map_err(|err| {
                tracing::warn!(property = name, "cannot resolve responsive property: {err}");
                err
            })?
            .clone();

        tracing::trace!(property = name, width = self.width, "responsive cache miss");
        self.cache.insert(
            name.to_string(),
            CacheEntry {
                width: self.width,
                value: resolved.clone(),
            },
        );
        Ok(Some(resolved))
    }

    /// Effective values of every registered property, in name order.
    pub fn resolved(&mut self) -> Result<BTreeMap<String, T>, ResolveError> {
        let names: Vec<String> = self.properties.keys().cloned().collect();
        let mut out = BTreeMap::new();
        for name in names {
            if let Some(value) = self.resolve_property(&name)? {
                out.insert(name, value);
            }
        }
        Ok(out)
    }

    /// Handle a resize event: record the width and re-resolve every
    /// registered property synchronously.
    pub fn on_resize(&mut self, width: u32) -> Result<BTreeMap<String, T>, ResolveError> {
        if width != self.width {
            tracing::debug!(from = self.width, to = width, "responsive resize");
            self.width = width;
            self.cache.clear();
        }
        self.resolved()
    }

    /// Drop every cached value (e.g. after a theme change).
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Number of cached entries
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
