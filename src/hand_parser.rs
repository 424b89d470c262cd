// src/hand_parser.rs

use crate::hand::{TileCounts, HAND_SIZE};
use crate::tiles::{Suit, Tile};

/// Type of a meld inside a decomposed hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum MeldKind {
    Sequence, // three consecutive ranks of one numeric suit
    Triplet,  // three identical tiles
}

/// One meld of a decomposition.
///
/// `tiles` is sorted low to high, so `tiles[0]` identifies the meld: the
/// repeated tile of a triplet, or the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Meld {
    pub tiles: [Tile; 3],
    pub kind: MeldKind,
}

impl Meld {
    pub fn triplet(tile: Tile) -> Self {
        Self { tiles: [tile; 3], kind: MeldKind::Triplet }
    }

    /// `start, start+1, start+2` in one numeric suit. `None` for honors or a start rank above 7.
    pub fn sequence(start: Tile) -> Option<Self> {
        let second = start.next_in_suit()?;
        let third = second.next_in_suit()?;
        Some(Self { tiles: [start, second, third], kind: MeldKind::Sequence })
    }

    pub fn is_triplet(&self) -> bool {
        self.kind == MeldKind::Triplet
    }

    pub fn suit(&self) -> Suit {
        self.tiles[0].suit()
    }

    /// Rank of the lowest tile; `None` only for honor triplets.
    pub fn start_rank(&self) -> Option<u8> {
        self.tiles[0].rank()
    }
}

/// One way of reading 14 tiles as a pair plus four melds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition {
    pub pair: Tile,
    /// Sorted by `Meld`'s ordering (lowest tile first).
    pub melds: [Meld; 4],
}

impl Decomposition {
    /// Re-counts the tiles this split consumes.
    pub fn tile_counts(&self) -> TileCounts {
        let mut counts = TileCounts::default();
        counts.add(self.pair);
        counts.add(self.pair);
        for meld in &self.melds {
            for &t in &meld.tiles {
                counts.add(t);
            }
        }
        counts
    }
}

/// Every pair + four-meld split of a 14-tile hand.
///
/// Each pair candidate is tried in code order and the remaining 12 tiles are
/// split by [`decompose_melds`]. Each distinct split is returned once, but a
/// hand can have several (e.g. `111 222 333` read as triplets or as three runs).
pub fn enumerate_decompositions(counts: &TileCounts) -> Vec<Decomposition> {
    if counts.total() != HAND_SIZE {
        return Vec::new();
    }

    let mut found = Vec::new();
    for (pair, c) in counts.iter() {
        if c < 2 {
            continue;
        }
        let Some(rest) = counts.take(pair, 2) else { continue };
        let mut splits: Vec<[Meld; 4]> = decompose_melds(rest)
            .into_iter()
            .filter_map(|mut melds| {
                debug_assert_eq!(melds.len(), 4, "12 tiles must split into 4 melds");
                melds.sort_unstable();
                <[Meld; 4]>::try_from(melds).ok()
            })
            .collect();
        // A quad as the smallest tile reaches the same melds through both branches.
        splits.sort_unstable();
        splits.dedup();
        for melds in splits {
            let decomposition = Decomposition { pair, melds };
            debug_assert_eq!(decomposition.tile_counts(), *counts, "split must consume the hand exactly");
            found.push(decomposition);
        }
    }
    found
}

/// True iff at least one split exists. Stops at the first one found.
pub fn has_decomposition(counts: &TileCounts) -> bool {
    if counts.total() != HAND_SIZE {
        return false;
    }
    counts
        .iter()
        .filter(|&(_, c)| c >= 2)
        .filter_map(|(pair, _)| counts.take(pair, 2))
        .any(can_form_melds)
}

/// All ways to split `counts` entirely into melds, in search order. The same
/// meld multiset can appear more than once.
///
/// The smallest remaining tile must belong to some meld, and the only melds
/// that can contain it are its triplet or the sequence it starts. If neither
/// is available the state is dead and nothing is returned.
pub fn decompose_melds(counts: TileCounts) -> Vec<Vec<Meld>> {
    let Some(first) = counts.first_tile() else {
        return vec![Vec::new()];
    };

    let mut found = Vec::new();

    // 1. Triplet
    if let Some(rest) = counts.take(first, 3) {
        for mut melds in decompose_melds(rest) {
            melds.push(Meld::triplet(first));
            found.push(melds);
        }
    }

    // 2. Sequence
    if let Some((meld, rest)) = take_sequence(&counts, first) {
        for mut melds in decompose_melds(rest) {
            melds.push(meld);
            found.push(melds);
        }
    }

    found
}

/// Existence-only version of [`decompose_melds`].
fn can_form_melds(counts: TileCounts) -> bool {
    let Some(first) = counts.first_tile() else {
        return true;
    };
    counts.take(first, 3).is_some_and(can_form_melds)
        || take_sequence(&counts, first).is_some_and(|(_, rest)| can_form_melds(rest))
}

fn take_sequence(counts: &TileCounts, start: Tile) -> Option<(Meld, TileCounts)> {
    let meld = Meld::sequence(start)?;
    let mut rest = *counts;
    for t in meld.tiles {
        rest = rest.take(t, 1)?;
    }
    Some((meld, rest))
}
