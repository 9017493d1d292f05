// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Dictionary-Of-Keys sparse matrix.
//!
//! An efficient structure for constructing a sparse matrix incrementally:
//! every element lives in an open-addressing hash table keyed by the packed
//! (row, column) coordinate. Random-order writes are cheap; structured
//! traversal is slower than in compressed formats, so finished matrices are
//! typically converted with [`DokMatrix::to_csr`] or [`DokMatrix::to_csc`].
//!
//! Two shape variants share this type, selected by constructor: growable
//! matrices ([`DokMatrix::new`], [`DokMatrix::with_capacity`]) extend their
//! bounds whenever a write lands beyond them, while fixed-shape matrices
//! ([`DokMatrix::with_shape`]) range-check writes instead. Bounds only ever
//! grow; there is no element deletion.
//!
//! `nnz` counts entries *stored* in the table. Writing `0.0` to an absent
//! element is a no-op, so sparsity is preserved; overwriting an existing
//! element with `0.0` keeps its entry (and its `nnz` contribution).

use crate::compressed::CscMatrix;
use crate::compressed::CsrMatrix;
use crate::dok::coords;
use crate::dok::open_hash_map::OpenHashMap;
use crate::vector::FloatVector;

/// Default floor for the backing table's slot count.
const DEFAULT_TABLE_CAPACITY: usize = 16384;

/// Default sparsity hint for fixed-shape construction.
const DEFAULT_SPARSITY: f32 = 0.05;

/// Dictionary-Of-Keys sparse matrix of `f32` values.
#[derive(Debug, Clone)]
pub struct DokMatrix {
    elements: OpenHashMap,
    num_rows: usize,
    num_cols: usize,
    growable: bool,
}

impl DokMatrix {
    /// Creates an empty growable matrix (0 rows, 0 columns).
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty growable matrix whose table starts with at least
    /// `capacity` slots (floor 16384).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: OpenHashMap::new(capacity.max(DEFAULT_TABLE_CAPACITY)),
            num_rows: 0,
            num_cols: 0,
            growable: true,
        }
    }

    /// Creates a fixed-shape matrix with the default sparsity hint (0.05).
    ///
    /// # Panics
    ///
    /// Panics if a dimension cannot be indexed by 32 bits.
    pub fn with_shape(num_rows: usize, num_cols: usize) -> Self {
        Self::with_shape_and_sparsity(num_rows, num_cols, DEFAULT_SPARSITY)
    }

    /// Creates a fixed-shape matrix. The sparsity hint sizes the backing
    /// table: `max(16384, round(num_rows * num_cols * sparsity))` slots.
    ///
    /// # Panics
    ///
    /// Panics if `sparsity` is outside `[0.0, 1.0]` or a dimension cannot be
    /// indexed by 32 bits.
    pub fn with_shape_and_sparsity(num_rows: usize, num_cols: usize, sparsity: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&sparsity),
            "sparsity must be in [0.0, 1.0]: {sparsity}"
        );
        assert!(
            num_rows as u64 <= u32::MAX as u64 + 1,
            "num_rows must be indexable by 32 bits: {num_rows}"
        );
        assert!(
            num_cols as u64 <= u32::MAX as u64 + 1,
            "num_cols must be indexable by 32 bits: {num_cols}"
        );
        let hinted = (num_rows as f64 * num_cols as f64 * sparsity as f64).round() as usize;
        Self {
            elements: OpenHashMap::new(hinted.max(DEFAULT_TABLE_CAPACITY)),
            num_rows,
            num_cols,
            growable: false,
        }
    }

    /// Current number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Current number of columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored entries. Explicit zeros written over existing
    /// entries keep counting; absent elements never count.
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if writes beyond the current bounds extend them.
    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// Returns the element at `(row, col)`, or `0.0` if absent.
    ///
    /// Reads are never range-checked: an element beyond the current bounds
    /// is simply absent.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.get_or(row, col, 0.0)
    }

    /// Returns the element at `(row, col)`, or `default` if absent.
    pub fn get_or(&self, row: usize, col: usize, default: f32) -> f32 {
        self.elements.get_or(key_at(row, col), default)
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// Writing `0.0` to an absent element is a no-op, so no entry is ever
    /// materialized for it. On a fresh insertion the growable variant
    /// extends the bounds to cover the written position.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has a fixed shape and the position is out of
    /// range, or if an index cannot be packed into 32 bits.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.replace(row, col, value);
    }

    /// Writes `value` at `(row, col)` and returns the previous element
    /// (`0.0` if none). Same mutation semantics as [`DokMatrix::set`].
    ///
    /// # Panics
    ///
    /// Panics if the matrix has a fixed shape and the position is out of
    /// range, or if an index cannot be packed into 32 bits.
    pub fn replace(&mut self, row: usize, col: usize, value: f32) -> f32 {
        if !self.growable {
            self.check_row(row);
            self.check_col(col);
        }
        let key = key_at(row, col);
        if value == 0.0 && !self.elements.contains_key(key) {
            return 0.0;
        }
        match self.elements.put(key, value) {
            Some(previous) => previous,
            None => {
                if self.growable {
                    self.num_rows = self.num_rows.max(row + 1);
                    self.num_cols = self.num_cols.max(col + 1);
                }
                0.0
            }
        }
    }

    /// Exchanges the contents of two rows across the full column range.
    ///
    /// Where both rows store an entry the values are exchanged in place at
    /// the two existing slots; where only one does, its entry is moved to
    /// the other row's key. `nnz` is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of range.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.check_row(row1);
        self.check_row(row2);
        if row1 == row2 {
            return;
        }

        for col in 0..self.num_cols {
            let k1 = key_at(row1, col);
            let k2 = key_at(row2, col);
            match (self.elements.find_slot(k1), self.elements.find_slot(k2)) {
                (Some(s1), Some(s2)) => {
                    let v1 = self.elements.value_at(s1);
                    let v2 = self.elements.set_at(s2, v1);
                    self.elements.set_at(s1, v2);
                }
                (Some(s1), None) => {
                    let v1 = self.elements.remove_at(s1);
                    self.elements.put(k2, v1);
                }
                (None, Some(s2)) => {
                    let v2 = self.elements.remove_at(s2);
                    self.elements.put(k1, v2);
                }
                (None, None) => {}
            }
        }
    }

    /// Number of stored entries in `row`.
    ///
    /// This scans every column in `[0, num_cols)`; DoK keeps no per-row
    /// index, so the cost is O(num_cols), not O(nnz).
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row_nnz(&self, row: usize) -> usize {
        self.check_row(row);
        (0..self.num_cols)
            .filter(|&col| self.elements.contains_key(key_at(row, col)))
            .count()
    }

    /// Fills `dst[..min(dst.len(), num_cols)]` with the elements of `row`,
    /// absent elements as `0.0`. Positions beyond that length are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn read_row_into(&self, row: usize, dst: &mut [f32]) {
        self.check_row(row);
        let end = dst.len().min(self.num_cols);
        for (col, out) in dst[..end].iter_mut().enumerate() {
            *out = self.elements.get(key_at(row, col));
        }
    }

    /// Clears `dst`, then sets every non-zero element of `row` into it.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn copy_row_into<V: FloatVector>(&self, row: usize, dst: &mut V) {
        self.check_row(row);
        dst.clear();
        for col in 0..self.num_cols {
            let value = self.elements.get(key_at(row, col));
            if value != 0.0 {
                dst.set(col, value);
            }
        }
    }

    /// Iterates `row` in column order. Absent elements are yielded as `0.0`
    /// when `include_zeros` is set, skipped otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn iter_row(
        &self,
        row: usize,
        include_zeros: bool,
    ) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.check_row(row);
        (0..self.num_cols).filter_map(move |col| {
            match self.elements.find_slot(key_at(row, col)) {
                Some(slot) => Some((col, self.elements.value_at(slot))),
                None if include_zeros => Some((col, 0.0)),
                None => None,
            }
        })
    }

    /// Iterates the elements of `row` whose stored value is non-zero, in
    /// column order. An explicit zero written over an entry is skipped even
    /// though the entry exists.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn nonzeros_in_row(&self, row: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.check_row(row);
        (0..self.num_cols).filter_map(move |col| {
            let value = self.elements.get(key_at(row, col));
            (value != 0.0).then_some((col, value))
        })
    }

    /// Iterates the column index of every stored entry in `row`, in column
    /// order, regardless of the stored value.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn column_indices_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.check_row(row);
        (0..self.num_cols).filter(move |&col| self.elements.contains_key(key_at(row, col)))
    }

    /// Iterates `col` in row order. Absent elements are yielded as `0.0`
    /// when `include_zeros` is set, skipped otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn iter_column(
        &self,
        col: usize,
        include_zeros: bool,
    ) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.check_col(col);
        (0..self.num_rows).filter_map(move |row| {
            match self.elements.find_slot(key_at(row, col)) {
                Some(slot) => Some((row, self.elements.value_at(slot))),
                None if include_zeros => Some((row, 0.0)),
                None => None,
            }
        })
    }

    /// Iterates the elements of `col` whose stored value is non-zero, in
    /// row order.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn nonzeros_in_column(&self, col: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.check_col(col);
        (0..self.num_rows).filter_map(move |row| {
            let value = self.elements.get(key_at(row, col));
            (value != 0.0).then_some((row, value))
        })
    }

    /// Iterates every stored cell as `(row, col, value)`, in table slot
    /// order. This is the fast whole-matrix traversal: O(nnz), never
    /// O(num_rows * num_cols). The order is unspecified and unstable across
    /// mutations.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.elements.iter().map(|(key, value)| {
            let (row, col) = coords::unpack(key);
            (row as usize, col as usize, value)
        })
    }

    /// Converts to a compressed row-major matrix.
    ///
    /// # Panics
    ///
    /// Panics if the table's iterator disagrees with its reported size; that
    /// is a broken internal invariant, not a recoverable condition.
    pub fn to_csr(&self) -> CsrMatrix {
        let (rows, cols, values) = self.to_coo_arrays();
        CsrMatrix::from_coo(&rows, &cols, &values, self.num_rows, self.num_cols, true)
            .expect("entries drained from the table lie within the matrix bounds")
    }

    /// Converts to a compressed column-major matrix.
    ///
    /// # Panics
    ///
    /// Panics if the table's iterator disagrees with its reported size; that
    /// is a broken internal invariant, not a recoverable condition.
    pub fn to_csc(&self) -> CscMatrix {
        let (rows, cols, values) = self.to_coo_arrays();
        CscMatrix::from_coo(&rows, &cols, &values, self.num_rows, self.num_cols, true)
            .expect("entries drained from the table lie within the matrix bounds")
    }

    /// Drains the table into three parallel coordinate arrays of length
    /// `nnz`, in one iterator pass.
    fn to_coo_arrays(&self) -> (Vec<usize>, Vec<usize>, Vec<f32>) {
        let nnz = self.elements.len();
        let mut rows = Vec::with_capacity(nnz);
        let mut cols = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);

        let mut entries = self.elements.iter();
        for drained in 0..nnz {
            let Some((key, value)) = entries.next() else {
                panic!("hash table iterator exhausted after {drained} of {nnz} entries");
            };
            let (row, col) = coords::unpack(key);
            rows.push(row as usize);
            cols.push(col as usize);
            values.push(value);
        }
        (rows, cols, values)
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.num_rows,
            "row index out of range: {row} >= {}",
            self.num_rows
        );
    }

    fn check_col(&self, col: usize) {
        assert!(
            col < self.num_cols,
            "column index out of range: {col} >= {}",
            self.num_cols
        );
    }
}

impl Default for DokMatrix {
    fn default() -> Self {
        Self::new()
    }
}

fn key_at(row: usize, col: usize) -> u64 {
    assert!(
        row <= u32::MAX as usize,
        "row index must fit in 32 bits: {row}"
    );
    assert!(
        col <= u32::MAX as usize,
        "column index must fit in 32 bits: {col}"
    );
    coords::pack(row as u32, col as u32)
}
