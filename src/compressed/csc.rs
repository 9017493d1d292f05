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

//! Compressed Sparse Column matrix.

use crate::compressed::compress;
use crate::error::Error;

/// Immutable column-major compressed sparse matrix.
///
/// `col_ptr` has length `num_cols + 1`; the entries of column `c` live at
/// positions `col_ptr[c]..col_ptr[c + 1]` of `row_indices`/`values`, with
/// row indices ascending within the column.
#[derive(Debug, Clone)]
pub struct CscMatrix {
    num_rows: usize,
    num_cols: usize,
    col_ptr: Vec<usize>,
    row_indices: Vec<usize>,
    values: Vec<f32>,
}

impl CscMatrix {
    /// Builds a CSC matrix from parallel coordinate arrays.
    ///
    /// Entries may arrive in any order. When `sum_duplicates` is set,
    /// entries sharing a coordinate are combined by addition; otherwise
    /// they are all kept, adjacent within their column.
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
        let (col_ptr, row_indices, values) = compress(
            cols,
            rows,
            values,
            num_cols,
            num_rows,
            sum_duplicates,
            "column",
            "row",
        )?;
        Ok(Self {
            num_rows,
            num_cols,
            col_ptr,
            row_indices,
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
        if col >= self.num_cols {
            return default;
        }
        let (start, end) = (self.col_ptr[col], self.col_ptr[col + 1]);
        match self.row_indices[start..end].binary_search(&row) {
            Ok(offset) => self.values[start + offset],
            Err(_) => default,
        }
    }

    /// The row indices and values of `col`, ascending by row.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn column(&self, col: usize) -> (&[usize], &[f32]) {
        assert!(
            col < self.num_cols,
            "column index out of range: {col} >= {}",
            self.num_cols
        );
        let (start, end) = (self.col_ptr[col], self.col_ptr[col + 1]);
        (&self.row_indices[start..end], &self.values[start..end])
    }

    /// Iterates `(row, value)` over the stored entries of `col`, ascending
    /// by row.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn iter_column(&self, col: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let (rows, values) = self.column(col);
        rows.iter().copied().zip(values.iter().copied())
    }

    /// Iterates every stored entry as `(row, col, value)` in column-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        (0..self.num_cols).flat_map(move |col| {
            self.iter_column(col)
                .map(move |(row, value)| (row, col, value))
        })
    }

    /// The compressed column offset array, length `num_cols + 1`.
    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    /// The row index of each stored entry.
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// The value of each stored entry.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CscMatrix {
        // 3x3: (0,0)=1.5, (1,2)=3.25, (2,1)=-4.0, delivered out of order.
        CscMatrix::from_coo(&[2, 0, 1], &[1, 0, 2], &[-4.0, 1.5, 3.25], 3, 3, true).unwrap()
    }

    #[test]
    fn test_from_coo_shapes_offsets() {
        let csc = sample();
        assert_eq!(csc.num_rows(), 3);
        assert_eq!(csc.num_cols(), 3);
        assert_eq!(csc.nnz(), 3);
        assert_eq!(csc.col_ptr(), &[0, 1, 2, 3]);
        assert_eq!(csc.row_indices(), &[0, 2, 1]);
        assert_eq!(csc.values(), &[1.5, -4.0, 3.25]);
    }

    #[test]
    fn test_get_and_column_access() {
        let csc = sample();
        assert_eq!(csc.get(0, 0), 1.5);
        assert_eq!(csc.get(1, 2), 3.25);
        assert_eq!(csc.get(2, 1), -4.0);
        assert_eq!(csc.get(1, 1), 0.0);
        assert_eq!(csc.get_or(1, 1, 9.0), 9.0);
        assert_eq!(csc.get(0, 5), 0.0);

        let (rows, values) = csc.column(1);
        assert_eq!(rows, &[2]);
        assert_eq!(values, &[-4.0]);
    }

    #[test]
    fn test_duplicates_summed() {
        let csc =
            CscMatrix::from_coo(&[1, 1, 0], &[0, 0, 1], &[2.0, 3.0, 1.0], 2, 2, true).unwrap();
        assert_eq!(csc.nnz(), 2);
        assert_eq!(csc.get(1, 0), 5.0);
        assert_eq!(csc.get(0, 1), 1.0);
    }

    #[test]
    fn test_iter_is_column_major() {
        let csc = sample();
        let cells: Vec<(usize, usize, f32)> = csc.iter().collect();
        assert_eq!(cells, vec![(0, 0, 1.5), (2, 1, -4.0), (1, 2, 3.25)]);
    }

    #[test]
    #[should_panic(expected = "column index out of range")]
    fn test_column_rejects_out_of_range() {
        sample().column(3);
    }

    #[test]
    fn test_from_coo_rejects_bad_input() {
        assert!(CscMatrix::from_coo(&[0, 1], &[0], &[1.0], 2, 2, true).is_err());
        assert!(CscMatrix::from_coo(&[0], &[9], &[1.0], 2, 2, true).is_err());
    }
}
