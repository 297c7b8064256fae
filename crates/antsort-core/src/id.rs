//! Strongly-typed identifiers: object colors and tick counters.

use std::fmt;

/// Color of an object lying on the grid (or carried by an ant).
///
/// `Color(0)` is reserved for "no object"; real colors are numbered from 1
/// in the order their counts were supplied at construction time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u16);

impl Color {
    /// The empty color: a cell holding no object.
    pub const EMPTY: Color = Color(0);

    /// Largest color id representable.
    pub const MAX: Color = Color(u16::MAX);

    /// Whether this is [`Color::EMPTY`].
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Color id for the `index`-th (0-based) entry of a color-count list.
    ///
    /// Returns `None` when the id would not fit.
    pub fn from_index(index: usize) -> Option<Color> {
        u16::try_from(index + 1).ok().map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Color {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation completes one full pass over
/// its ants. `TickId(0)` means no tick has run yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> TickId {
        TickId(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
