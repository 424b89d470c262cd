// src/hand.rs
use std::fmt;

use crate::tiles::Tile;

/// Number of tiles in a complete hand.
pub const HAND_SIZE: usize = 14;
/// Copies of each tile kind in a full set.
pub const MAX_COPIES: u8 = 4;
const CODE_SPACE: usize = 40;

/// Tile multiplicities indexed by wire code.
///
/// `Copy` on purpose: the decomposer hands each branch its own snapshot
/// instead of undoing edits in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCounts([u8; CODE_SPACE]);

impl Default for TileCounts {
    fn default() -> Self {
        Self([0; CODE_SPACE])
    }
}

impl TileCounts {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts = Self::default();
        for &t in tiles {
            counts.add(t);
        }
        counts
    }

    pub fn add(&mut self, tile: Tile) {
        self.0[tile.code() as usize] += 1;
    }

    pub fn count(&self, tile: Tile) -> u8 {
        self.0[tile.code() as usize]
    }

    /// A new snapshot with `n` copies of `tile` removed, or `None` if fewer are present.
    pub fn take(&self, tile: Tile, n: u8) -> Option<TileCounts> {
        let idx = tile.code() as usize;
        let left = self.0[idx].checked_sub(n)?;
        let mut next = *self;
        next.0[idx] = left;
        Some(next)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Smallest tile code still present.
    pub fn first_tile(&self) -> Option<Tile> {
        self.iter().next().map(|(t, _)| t)
    }

    /// Present tiles with their multiplicities, in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        Tile::ALL.into_iter().filter_map(move |t| {
            let c = self.count(t);
            (c > 0).then_some((t, c))
        })
    }
}

/// Why a tile list could not be turned into a [`Hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// A hand must hold exactly 14 tiles (after the last tile is appended).
    WrongTileCount(usize),
    /// Code outside the 34 valid tile codes.
    InvalidTile(i32),
    /// More than four copies of one tile kind.
    TooManyCopies(Tile),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::WrongTileCount(n) => {
                write!(f, "hand must contain {} tiles, got {}", HAND_SIZE, n)
            }
            HandError::InvalidTile(code) => write!(f, "invalid tile code {}", code),
            HandError::TooManyCopies(tile) => {
                write!(f, "more than {} copies of tile {} ({})", MAX_COPIES, tile.code(), tile)
            }
        }
    }
}

impl std::error::Error for HandError {}

#[cfg(feature = "python")]
impl From<HandError> for pyo3::PyErr {
    fn from(err: HandError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// A validated 14-tile hand. Input order is kept for callers; evaluation
/// only looks at `counts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
    counts: TileCounts,
}

impl Hand {
    pub fn from_codes(codes: &[i32]) -> Result<Self, HandError> {
        Self::from_parts(codes, None)
    }

    /// Concealed tiles plus an optional drawn or claimed tile.
    pub fn from_parts(codes: &[i32], last_tile: Option<i32>) -> Result<Self, HandError> {
        let len = codes.len() + usize::from(last_tile.is_some());
        if len != HAND_SIZE {
            return Err(HandError::WrongTileCount(len));
        }
        let tiles = codes
            .iter()
            .copied()
            .chain(last_tile)
            .map(|code| Tile::try_from(code).map_err(|_| HandError::InvalidTile(code)))
            .collect::<Result<Vec<_>, _>>()?;
        let counts = TileCounts::from_tiles(&tiles);
        Ok(Self { tiles, counts })
    }

    /// Rejects hands that could not come from a single 136-tile set.
    pub fn check_copy_limit(&self) -> Result<(), HandError> {
        match self.counts.iter().find(|&(_, c)| c > MAX_COPIES) {
            Some((tile, _)) => Err(HandError::TooManyCopies(tile)),
            None => Ok(()),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn counts(&self) -> &TileCounts {
        &self.counts
    }
}
