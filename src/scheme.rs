//! Presentation schemes for visible rows.
//!
//! The controller only tags rows as highlighted or multi-selected. A renderer
//! turns those tags into a [`Scheme`] and looks its colors up in a
//! [`SchemeMap`], a table keyed by scheme that is checked on construction to
//! hold exactly one entry per variant.

use crate::error::{PickError, Result};

/// Visual role of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Plain row.
    Normal,
    /// The highlighted row.
    Selected,
    /// A row marked for multi-selection output.
    Out,
}

impl Scheme {
    /// Every variant, in table order.
    pub const ALL: [Scheme; 3] = [Scheme::Normal, Scheme::Selected, Scheme::Out];

    const fn slot(self) -> usize {
        match self {
            Scheme::Normal => 0,
            Scheme::Selected => 1,
            Scheme::Out => 2,
        }
    }

    /// Scheme for a row with the given tags. Highlight wins over selection.
    pub fn for_row(highlighted: bool, selected: bool) -> Self {
        if highlighted {
            Scheme::Selected
        } else if selected {
            Scheme::Out
        } else {
            Scheme::Normal
        }
    }
}

/// A value for every [`Scheme`].
///
/// # Examples
///
/// ```
/// use linepick::{Scheme, SchemeMap};
///
/// let widths = SchemeMap::from_entries([
///     (Scheme::Normal, 1),
///     (Scheme::Selected, 2),
///     (Scheme::Out, 3),
/// ]).unwrap();
/// assert_eq!(*widths.get(Scheme::Selected), 2);
///
/// // Missing variants are rejected.
/// assert!(SchemeMap::from_entries([(Scheme::Normal, 1)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeMap<V> {
    entries: [V; 3],
}

impl<V> SchemeMap<V> {
    /// Build a table from `(scheme, value)` pairs.
    ///
    /// # Errors
    ///
    /// [`PickError::DuplicateScheme`] when a variant appears twice and
    /// [`PickError::MissingScheme`] when one is absent.
    pub fn from_entries(entries: impl IntoIterator<Item = (Scheme, V)>) -> Result<Self> {
        let mut slots: [Option<V>; 3] = [None, None, None];
        for (scheme, value) in entries {
            let slot = &mut slots[scheme.slot()];
            if slot.is_some() {
                return Err(PickError::DuplicateScheme(scheme));
            }
            *slot = Some(value);
        }

        let [normal, selected, out] = slots;
        Ok(Self {
            entries: [
                normal.ok_or(PickError::MissingScheme(Scheme::Normal))?,
                selected.ok_or(PickError::MissingScheme(Scheme::Selected))?,
                out.ok_or(PickError::MissingScheme(Scheme::Out))?,
            ],
        })
    }

    /// The value for `scheme`.
    pub fn get(&self, scheme: Scheme) -> &V {
        &self.entries[scheme.slot()]
    }

    /// Iterate `(scheme, value)` pairs in [`Scheme::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &V)> {
        Scheme::ALL.into_iter().zip(self.entries.iter())
    }
}

/// Foreground and background colors, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPair {
    /// Text color.
    pub fg: String,
    /// Fill color.
    pub bg: String,
}

impl ColorPair {
    fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: fg.to_owned(),
            bg: bg.to_owned(),
        }
    }
}

/// Colors per scheme.
pub type Palette = SchemeMap<ColorPair>;

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: [
                ColorPair::new("#dddddd", "#000000"),
                ColorPair::new("#ffffff", "#004400"),
                ColorPair::new("#000000", "#004400"),
            ],
        }
    }
}
