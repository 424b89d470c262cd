// src/fan_calculation.rs

use std::fmt;

use crate::hand::Hand;
use crate::hand_parser::{Decomposition, Meld};

/// Predicate deciding whether a rule scores for one reading of a hand.
pub type RulePredicate = fn(&Hand, &Decomposition) -> bool;

/// A named scoring pattern and the fan it adds when it applies.
///
/// Rules are independent: every rule that applies to a decomposition
/// contributes its value, and the order of the list does not matter.
#[derive(Clone, Copy)]
pub struct FanRule {
    pub name: &'static str,
    pub value: u32,
    pub applies: RulePredicate,
}

impl fmt::Debug for FanRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanRule")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl FanRule {
    /// 清一色: every tile from one numeric suit.
    pub const PURE_COLOR: FanRule = FanRule {
        name: "pure_color",
        value: 24,
        applies: is_pure_color,
    };

    /// 碰碰和: all four melds are triplets.
    pub const ALL_TRIPLETS: FanRule = FanRule {
        name: "all_triplets",
        value: 6,
        applies: is_all_triplets,
    };

    pub const fn new(name: &'static str, value: u32, applies: RulePredicate) -> Self {
        Self { name, value, applies }
    }
}

/// The rule list used by the top-level entry points.
pub fn default_rules() -> Vec<FanRule> {
    vec![FanRule::PURE_COLOR, FanRule::ALL_TRIPLETS]
}

/// Only looks at the full hand, not at how it was split.
fn is_pure_color(hand: &Hand, _decomposition: &Decomposition) -> bool {
    let tiles = hand.tiles();
    match tiles.first() {
        Some(first) if !first.is_honor() => tiles.iter().all(|t| t.suit() == first.suit()),
        _ => false,
    }
}

fn is_all_triplets(_hand: &Hand, decomposition: &Decomposition) -> bool {
    decomposition.melds.iter().all(Meld::is_triplet)
}

/// Sum of every applying rule for one decomposition. Not gated.
pub fn fan_total(hand: &Hand, decomposition: &Decomposition, rules: &[FanRule]) -> u32 {
    rules
        .iter()
        .filter(|rule| (rule.applies)(hand, decomposition))
        .map(|rule| rule.value)
        .sum()
}

/// Best total over all decompositions, or 0 if there are none or the best
/// total is below `min_fan`.
pub fn score(hand: &Hand, decompositions: &[Decomposition], rules: &[FanRule], min_fan: u32) -> u32 {
    let best = decompositions
        .iter()
        .map(|d| fan_total(hand, d, rules))
        .max()
        .unwrap_or(0);
    if best >= min_fan { best } else { 0 }
}

/// How the best-scoring decomposition was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanBreakdown {
    pub decomposition: Decomposition,
    pub total: u32,
    /// Names of the matching rules, in rule-list order.
    pub matched: Vec<&'static str>,
}

/// Ungated breakdown of the highest-scoring decomposition. On ties the
/// earliest decomposition wins.
pub fn best_breakdown(
    hand: &Hand,
    decompositions: &[Decomposition],
    rules: &[FanRule],
) -> Option<FanBreakdown> {
    let mut best: Option<FanBreakdown> = None;
    for d in decompositions {
        let applying: Vec<&FanRule> = rules.iter().filter(|rule| (rule.applies)(hand, d)).collect();
        let total: u32 = applying.iter().map(|rule| rule.value).sum();
        if best.as_ref().map_or(true, |b| total > b.total) {
            let matched = applying.iter().map(|rule| rule.name).collect();
            best = Some(FanBreakdown { decomposition: d.clone(), total, matched });
        }
    }
    best
}
