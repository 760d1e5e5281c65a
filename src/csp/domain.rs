#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Per-cell candidate domains with reversible constraint propagation.
//!
//! The [`DomainStore`] maps every cell to the ascending-ordered set of values
//! not yet excluded for it by its row/column/box peers. Committing a value
//! collapses the cell's domain to a singleton and removes the value from the
//! domains of its peers; uncommitting restores the exact pre-commit state.
//!
//! Reversibility is guaranteed by an internal trail: each commit records
//! which peers actually lost the committed value, and the matching uncommit
//! re-inserts the value into exactly those peers. Commit/uncommit pairs must
//! therefore be strictly nested (stack discipline), which is how the
//! backtracking searches use them; violations are programming errors and are
//! asserted in testing builds.
//!
//! Cells that were already filled when the store was built are fixed: their
//! domains collapse to the given value and are never pruned afterwards, so a
//! given can never lose its value to propagation. Domains of other cells may
//! shrink all the way to empty — a size-0 domain signals that the current
//! partial assignment is locally infeasible, which is what forward checking
//! looks for.

use crate::sudoku::grid::{Cell, Grid, SIZE};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// An ascending-ordered candidate list for one cell. Nine values fit inline.
pub type Candidates = SmallVec<[u8; SIZE]>;

/// One commit's undo information: the peers that lost `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    cell: Cell,
    value: u8,
    pruned: SmallVec<[Cell; 20]>,
}

/// The candidate domains of all 81 cells, with commit/uncommit propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: [[Candidates; SIZE]; SIZE],
    /// Cells filled in the grid the store was built from. Never pruned.
    fixed: FxHashSet<Cell>,
    trail: Vec<Record>,
}

fn remove_value(domain: &mut Candidates, value: u8) -> bool {
    match domain.binary_search(&value) {
        Ok(index) => {
            domain.remove(index);
            true
        }
        Err(_) => false,
    }
}

impl DomainStore {
    /// Builds the store for `grid`: every cell starts with `{1..=9}`, then
    /// every filled cell collapses to the singleton of its value and that
    /// value is removed from the domains of its unfixed peers.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let domains = std::array::from_fn(|_| std::array::from_fn(|_| (1..=9).collect()));
        let fixed = Cell::all().filter(|&cell| !grid.is_empty_at(cell)).collect();

        let mut store = Self {
            domains,
            fixed,
            trail: Vec::new(),
        };

        for cell in Cell::all() {
            let value = grid.value(cell);
            if value != 0 {
                store.collapse(cell, value);
            }
        }

        store
    }

    /// Collapse without trail bookkeeping; only used while initialising.
    fn collapse(&mut self, cell: Cell, value: u8) {
        let domain = self.domain_mut(cell);
        domain.clear();
        domain.push(value);

        for peer in cell.peers() {
            if !self.fixed.contains(&peer) {
                remove_value(self.domain_mut(peer), value);
            }
        }
    }

    /// The current candidate list of `cell`.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> &Candidates {
        &self.domains[cell.row][cell.col]
    }

    /// An owned copy of `cell`'s current domain, for later [`Self::uncommit`].
    #[must_use]
    pub fn snapshot(&self, cell: Cell) -> Candidates {
        self.candidates(cell).clone()
    }

    /// Whether any cell has run out of candidates.
    #[must_use]
    pub fn has_empty_domain(&self) -> bool {
        self.domains.iter().flatten().any(SmallVec::is_empty)
    }

    /// Tentatively assigns `value` to `cell`: collapses the cell's domain to
    /// the singleton `{value}` and removes `value` from every unfixed peer
    /// domain containing it, recording the prunes for the matching
    /// [`Self::uncommit`].
    pub fn commit(&mut self, cell: Cell, value: u8) {
        debug_assert!(
            self.candidates(cell).contains(&value),
            "commit of {value} at {cell} outside its domain"
        );

        let domain = self.domain_mut(cell);
        domain.clear();
        domain.push(value);

        let mut pruned = SmallVec::new();
        for peer in cell.peers() {
            if !self.fixed.contains(&peer) && remove_value(self.domain_mut(peer), value) {
                pruned.push(peer);
            }
        }

        self.trail.push(Record {
            cell,
            value,
            pruned,
        });
    }

    /// Reverses the most recent commit: restores `cell`'s domain from the
    /// caller-supplied pre-commit snapshot and re-inserts the committed value
    /// into exactly the peers that lost it.
    ///
    /// Must be called with the cell of the most recent un-reversed commit and
    /// the snapshot taken immediately before it (stack discipline).
    pub fn uncommit(&mut self, cell: Cell, snapshot: Candidates) {
        let record = self.trail.pop();
        debug_assert!(
            record.as_ref().is_some_and(|record| record.cell == cell),
            "uncommit at {cell} without a matching commit"
        );
        let Some(record) = record else { return };

        *self.domain_mut(cell) = snapshot;
        for peer in record.pruned {
            let domain = self.domain_mut(peer);
            if let Err(index) = domain.binary_search(&record.value) {
                domain.insert(index, record.value);
            }
        }
    }

    fn domain_mut(&mut self, cell: Cell) -> &mut Candidates {
        &mut self.domains[cell.row][cell.col]
    }
}
