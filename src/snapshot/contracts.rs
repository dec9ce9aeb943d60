//! Vote pools derived from completed contracts.
//!
//! Contract detection happens elsewhere; this module only receives a
//! summary of each completed contract and converts it into council votes.

use serde::{Deserialize, Serialize};

use crate::tracks::{Suit, TrackResources};

/// Kind of a completed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// Same-suit set. Counts toward guild standing.
    Partnership,
    /// Run of cards. Counts toward caravan capacity.
    TradeRoute,
    /// Same-rank set. Counts toward market share.
    Monopoly,
    /// Same-suit run. Counts toward guild standing and caravan capacity.
    SilkRoad,
}

/// What the council needs to know about one completed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    pub kind: ContractKind,
    /// Suit of the contract's cards, when they share one.
    #[serde(default)]
    pub suit: Option<Suit>,
    /// Number of cards in the contract.
    pub size: u32,
    /// True if the cards also form a same-suit sequence.
    #[serde(default)]
    pub sequential: bool,
}

impl ContractSummary {
    pub fn new(kind: ContractKind, suit: Option<Suit>, size: u32) -> Self {
        ContractSummary {
            kind,
            suit,
            size,
            sequential: false,
        }
    }

    /// Marks the contract's cards as a same-suit sequence.
    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }
}

/// Council votes earned from a set of contracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteBreakdown {
    pub resources: TrackResources,
    pub silk_road_marks: u32,
}

impl VoteBreakdown {
    /// Sums the votes earned by each contract, saturating at `u32::MAX`.
    ///
    /// A partnership whose cards also run in sequence earns a silk-road
    /// mark; every silk road earns one. Suit votes need a known suit and
    /// are skipped without one.
    pub fn from_contracts(contracts: &[ContractSummary]) -> Self {
        Self::accumulate(contracts, |a, b| Some(a.saturating_add(b))).unwrap_or_default()
    }

    /// Like [`VoteBreakdown::from_contracts`], but `None` if any pool would
    /// overflow.
    pub fn try_from_contracts(contracts: &[ContractSummary]) -> Option<Self> {
        Self::accumulate(contracts, u32::checked_add)
    }

    fn accumulate(contracts: &[ContractSummary], add: impl Fn(u32, u32) -> Option<u32>) -> Option<Self> {
        let mut breakdown = VoteBreakdown::default();
        for contract in contracts {
            let resources = &mut breakdown.resources;
            match contract.kind {
                ContractKind::Partnership => {
                    if let Some(suit) = contract.suit {
                        let slot = &mut resources.suits[suit as usize];
                        *slot = add(*slot, contract.size)?;
                        if contract.sequential {
                            breakdown.silk_road_marks = add(breakdown.silk_road_marks, 1)?;
                        }
                    }
                }
                ContractKind::SilkRoad => {
                    if let Some(suit) = contract.suit {
                        let slot = &mut resources.suits[suit as usize];
                        *slot = add(*slot, contract.size)?;
                    }
                    resources.route = add(resources.route, contract.size)?;
                    breakdown.silk_road_marks = add(breakdown.silk_road_marks, 1)?;
                }
                ContractKind::TradeRoute => resources.route = add(resources.route, contract.size)?,
                ContractKind::Monopoly => resources.market = add(resources.market, contract.size)?,
            }
        }
        Some(breakdown)
    }
}
