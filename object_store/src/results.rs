//! Result rows and summaries
//!
//! This module defines the shapes a store hands back: rows of cells for
//! `execute`, and an estimate summary for `estimate`.

use crate::object::DomainObject;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One cell of a results row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A domain object, shared through the identity cache once translated
    Object(Arc<DomainObject>),
    /// A pass-through scalar or aggregate value
    Value(Value),
}

impl Cell {
    /// The object payload, if this cell carries one
    pub fn object(&self) -> Option<&Arc<DomainObject>> {
        match self {
            Cell::Object(object) => Some(object),
            Cell::Value(_) => None,
        }
    }

    /// The scalar payload, if this cell carries one
    pub fn value(&self) -> Option<&Value> {
        match self {
            Cell::Object(_) => None,
            Cell::Value(value) => Some(value),
        }
    }
}

/// Ordered sequence of cells
///
/// Row order and cell order always match what the underlying store
/// produced; nothing in this layer reorders results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsRow {
    cells: Vec<Cell>,
}

impl ResultsRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cells in order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at an index
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl std::ops::Index<usize> for ResultsRow {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a ResultsRow {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for ResultsRow {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Estimate summary for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsInfo {
    /// Best-guess row count
    pub rows: usize,
    /// Lower bound on the row count
    pub min: usize,
    /// Upper bound on the row count
    pub max: usize,
    /// Estimated time to fetch the complete result set, in milliseconds
    pub complete_ms: u64,
}

impl ResultsInfo {
    pub fn new(rows: usize, min: usize, max: usize, complete_ms: u64) -> Self {
        Self {
            rows,
            min,
            max,
            complete_ms,
        }
    }
}
