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

//! Compressed Sparse Row matrix.

use crate::compressed::compress;
use crate::error::Error;

/// Immutable row-major compressed sparse matrix.
///
/// `row_ptr` has length `num_rows + 1`; the entries of row `r` live at
/// positions `row_ptr[r]..row_ptr[r + 1]` of `col_indices`/`values`, with
/// column indices ascending within the row.
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    num_rows: usize,
    num_cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f32>,
}

impl CsrMatrix {
    /// Builds a CSR matrix from parallel coordinate arrays.
    ///
    /// Entries may arrive in any order. When `sum_duplicates` is set,
    /// entries sharing a coordinate are combined by addition; otherwise
    /// they are all kept, adjacent within their row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the arrays have unequal lengths and
    /// `IndexOutOfRange` if any coordinate lies outside
    /// `num_rows` x `num_cols`.
    pub fn from_coo(
        rows: &[usize],
        cols: &[usize],
        values: &[f32],
        num_rows: usize,
        num_cols: usize,
        sum_duplicates: bool,
    ) -> Result<Self, Error> {
        let (row_ptr, col_indices, values) = compress(
            rows,
            cols,
            values,
            num_rows,
            num_cols,
            sum_duplicates,
            "row",
            "column",
        )?;
        Ok(Self {
            num_rows,
            num_cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the element at `(row, col)`, or `0.0` if absent. Positions
    /// outside the matrix bounds read as absent.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.get_or(row, col, 0.0)
    }

    /// Returns the element at `(row, col)`, or `default` if absent.
    pub fn get_or(&self, row: usize, col: usize, default: f32) -> f32 {
        if row >= self.num_rows {
            return default;
        }
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        match self.col_indices[start..end].binary_search(&col) {
            Ok(offset) => self.values[start + offset],
            Err(_) => default,
        }
    }

    /// The column indices and values of `row`, ascending by column.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> (&[usize], &[f32]) {
        assert!(
            row < self.num_rows,
            "row index out of range: {row} >= {}",
            self.num_rows
        );
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        (&self.col_indices[start..end], &self.values[start..end])
    }

    /// Iterates `(col, value)` over the stored entries of `row`, ascending
    /// by column.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn iter_row(&self, row: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let (cols, values) = self.row(row);
        cols.iter().copied().zip(values.iter().copied())
    }

    /// Iterates every stored entry as `(row, col, value)` in row-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        (0..self.num_rows).flat_map(move |row| {
            self.iter_row(row)
                .map(move |(col, value)| (row, col, value))
        })
    }

    /// The compressed row offset array, length `num_rows + 1`.
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// The column index of each stored entry.
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// The value of each stored entry.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsrMatrix {
        // 3x3: (0,0)=1.5, (1,2)=3.25, (2,1)=-4.0, delivered out of order.
        CsrMatrix::from_coo(&[2, 0, 1], &[1, 0, 2], &[-4.0, 1.5, 3.25], 3, 3, true).unwrap()
    }

    #[test]
    fn test_from_coo_shapes_offsets() {
        let csr = sample();
        assert_eq!(csr.num_rows(), 3);
        assert_eq!(csr.num_cols(), 3);
        assert_eq!(csr.nnz(), 3);
        assert_eq!(csr.row_ptr(), &[0, 1, 2, 3]);
        assert_eq!(csr.col_indices(), &[0, 2, 1]);
        assert_eq!(csr.values(), &[1.5, 3.25, -4.0]);
    }

    #[test]
    fn test_get_and_row_access() {
        let csr = sample();
        assert_eq!(csr.get(0, 0), 1.5);
        assert_eq!(csr.get(1, 2), 3.25);
        assert_eq!(csr.get(2, 1), -4.0);
        assert_eq!(csr.get(1, 1), 0.0);
        assert_eq!(csr.get_or(1, 1, 9.0), 9.0);
        assert_eq!(csr.get(5, 0), 0.0);

        let (cols, values) = csr.row(1);
        assert_eq!(cols, &[2]);
        assert_eq!(values, &[3.25]);
    }

    #[test]
    fn test_duplicates_summed() {
        let csr =
            CsrMatrix::from_coo(&[0, 0, 1], &[1, 1, 0], &[2.0, 3.0, 1.0], 2, 2, true).unwrap();
        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.get(0, 1), 5.0);
        assert_eq!(csr.get(1, 0), 1.0);
    }

    #[test]
    fn test_empty_rows_have_empty_spans() {
        let csr = CsrMatrix::from_coo(&[2], &[0], &[7.0], 4, 1, true).unwrap();
        assert_eq!(csr.row_ptr(), &[0, 0, 0, 1, 1]);
        assert_eq!(csr.row(0), (&[][..], &[][..]));
        assert_eq!(csr.iter_row(1).count(), 0);
        assert_eq!(csr.get(3, 0), 0.0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let csr = sample();
        let cells: Vec<(usize, usize, f32)> = csr.iter().collect();
        assert_eq!(cells, vec![(0, 0, 1.5), (1, 2, 3.25), (2, 1, -4.0)]);
    }

    #[test]
    #[should_panic(expected = "row index out of range")]
    fn test_row_rejects_out_of_range() {
        sample().row(3);
    }

    #[test]
    fn test_from_coo_rejects_bad_input() {
        assert!(CsrMatrix::from_coo(&[0], &[0, 1], &[1.0], 2, 2, true).is_err());
        assert!(CsrMatrix::from_coo(&[9], &[0], &[1.0], 2, 2, true).is_err());
    }
}
