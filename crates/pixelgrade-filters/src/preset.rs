//! Named filter presets.
//!
//! Hosts that expose adjustments by a human-readable name register them here
//! once and look them up when building a pipeline. Lookup of an unknown name
//! is a recoverable error, never a panic.

use std::collections::HashMap;

use crate::error::FilterError;
use crate::filter::{Alpha, Brightness, Contrast, Filter, Gamma};

/// A registry of named, preconstructed filters.
///
/// [`Presets::default`] installs the built-in table; [`Presets::empty`]
/// starts from nothing for hosts that supply their own names.
///
/// # Examples
///
/// ```
/// use pixelgrade_filters::{Filter, Presets};
///
/// let presets = Presets::default();
///
/// let lena = presets.get("Lena").unwrap();
/// assert!(matches!(lena, Filter::Gamma(_)));
///
/// assert!(presets.get("No Such Preset").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Presets {
    entries: HashMap<String, Filter>,
}

impl Presets {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `filter` under `name`, replacing any previous entry with the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, filter: Filter) {
        self.entries.insert(name.into(), filter);
    }

    /// Look up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::PresetNotFound`] if nothing is registered under
    /// `name`.
    pub fn get(&self, name: &str) -> Result<Filter, FilterError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| FilterError::PresetNotFound(name.to_string()))
    }

    /// Names of every registered preset, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no presets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Presets {
    /// The built-in preset table.
    fn default() -> Self {
        let mut presets = Self::empty();
        presets.insert(
            "110% Brightness",
            Filter::Brightness(Brightness::new_unchecked(1.1)),
        );
        presets.insert("3x Contrast", Filter::Contrast(Contrast::new_unchecked(128.0)));
        presets.insert("Lena", Filter::Gamma(Gamma::new_unchecked(0.25)));
        presets.insert("Mandrill", Filter::Gamma(Gamma::new_unchecked(2.0)));
        presets.insert("80% Transparency", Filter::Alpha(Alpha::new_unchecked(0.8)));
        presets
    }
}
