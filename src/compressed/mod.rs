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

//! Compressed sparse matrix formats.
//!
//! [`CsrMatrix`] (row-major) and [`CscMatrix`] (column-major) are immutable
//! structures built in one shot from parallel coordinate arrays. Both share
//! the same counting-sort compression over a chosen major axis: histogram,
//! prefix sum into the offset array, cursor scatter, per-bucket ordering,
//! and optional summation of duplicate coordinates.

mod csc;
mod csr;

pub use self::csc::CscMatrix;
pub use self::csr::CsrMatrix;

use crate::error::Error;
use crate::error::ErrorKind;

/// Counting-sorts COO entries by the major axis.
///
/// Returns `(ptr, indices, values)`: `ptr` has length `num_major + 1` with
/// `ptr[0] == 0` and `ptr[num_major] == nnz`; `indices`/`values` hold the
/// minor index and value of each entry, ascending by minor index within
/// each bucket. When `sum_duplicates` is set, entries sharing a
/// (major, minor) coordinate are combined by addition.
///
/// Complexity is O(nnz + num_major) plus the per-bucket sorts; buckets are
/// integer indices, so no comparison sort spans the whole input.
#[allow(clippy::type_complexity)]
pub(crate) fn compress(
    major: &[usize],
    minor: &[usize],
    values: &[f32],
    num_major: usize,
    num_minor: usize,
    sum_duplicates: bool,
    major_name: &'static str,
    minor_name: &'static str,
) -> Result<(Vec<usize>, Vec<usize>, Vec<f32>), Error> {
    if major.len() != values.len() || minor.len() != values.len() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "coordinate and value arrays must have equal lengths",
        )
        .with_context(major_name, major.len())
        .with_context(minor_name, minor.len())
        .with_context("values", values.len()));
    }
    for (position, (&m, &n)) in major.iter().zip(minor.iter()).enumerate() {
        if m >= num_major {
            return Err(Error::new(
                ErrorKind::IndexOutOfRange,
                format!("{major_name} index out of range"),
            )
            .with_context("position", position)
            .with_context("index", m)
            .with_context("bound", num_major));
        }
        if n >= num_minor {
            return Err(Error::new(
                ErrorKind::IndexOutOfRange,
                format!("{minor_name} index out of range"),
            )
            .with_context("position", position)
            .with_context("index", n)
            .with_context("bound", num_minor));
        }
    }

    let nnz = values.len();

    // Histogram of entries per major index, then prefix sum into offsets.
    let mut ptr = vec![0usize; num_major + 1];
    for &m in major {
        ptr[m + 1] += 1;
    }
    for i in 0..num_major {
        ptr[i + 1] += ptr[i];
    }

    // Scatter each entry into its bucket via a cursor per major index.
    let mut cursor: Vec<usize> = ptr[..num_major].to_vec();
    let mut out_indices = vec![0usize; nnz];
    let mut out_values = vec![0.0f32; nnz];
    for i in 0..nnz {
        let dst = cursor[major[i]];
        out_indices[dst] = minor[i];
        out_values[dst] = values[i];
        cursor[major[i]] += 1;
    }

    // Order each bucket by minor index so lookups can binary-search and
    // duplicates become adjacent.
    let mut scratch: Vec<(usize, f32)> = Vec::new();
    for m in 0..num_major {
        let (start, end) = (ptr[m], ptr[m + 1]);
        if end - start < 2 {
            continue;
        }
        scratch.clear();
        scratch.extend(
            out_indices[start..end]
                .iter()
                .copied()
                .zip(out_values[start..end].iter().copied()),
        );
        scratch.sort_unstable_by_key(|&(index, _)| index);
        for (offset, &(index, value)) in scratch.iter().enumerate() {
            out_indices[start + offset] = index;
            out_values[start + offset] = value;
        }
    }

    if sum_duplicates {
        // Compact in place: the write cursor never overtakes the read
        // cursor, and the offset array is rebuilt as buckets shrink.
        let mut compacted_ptr = vec![0usize; num_major + 1];
        let mut write = 0usize;
        for m in 0..num_major {
            let (start, end) = (ptr[m], ptr[m + 1]);
            let mut read = start;
            while read < end {
                let index = out_indices[read];
                let mut sum = out_values[read];
                read += 1;
                while read < end && out_indices[read] == index {
                    sum += out_values[read];
                    read += 1;
                }
                out_indices[write] = index;
                out_values[write] = sum;
                write += 1;
            }
            compacted_ptr[m + 1] = write;
        }
        out_indices.truncate(write);
        out_values.truncate(write);
        ptr = compacted_ptr;
    }

    Ok((ptr, out_indices, out_values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_orders_buckets() {
        let major = [1usize, 0, 1, 0];
        let minor = [2usize, 1, 0, 0];
        let values = [1.0f32, 2.0, 3.0, 4.0];

        let (ptr, indices, out) =
            compress(&major, &minor, &values, 2, 3, false, "row", "col").unwrap();
        assert_eq!(ptr, vec![0, 2, 4]);
        assert_eq!(indices, vec![0, 1, 0, 2]);
        assert_eq!(out, vec![4.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_compress_sums_duplicates() {
        let major = [0usize, 0, 0, 1];
        let minor = [1usize, 1, 0, 1];
        let values = [2.0f32, 3.0, 1.0, 5.0];

        let (ptr, indices, out) =
            compress(&major, &minor, &values, 2, 2, true, "row", "col").unwrap();
        assert_eq!(ptr, vec![0, 2, 3]);
        assert_eq!(indices, vec![0, 1, 1]);
        assert_eq!(out, vec![1.0, 5.0, 5.0]);
    }

    #[test]
    fn test_compress_keeps_duplicates_when_flag_unset() {
        let major = [0usize, 0];
        let minor = [1usize, 1];
        let values = [2.0f32, 3.0];

        let (ptr, indices, out) =
            compress(&major, &minor, &values, 1, 2, false, "row", "col").unwrap();
        assert_eq!(ptr, vec![0, 2]);
        assert_eq!(indices, vec![1, 1]);
        assert_eq!(out.iter().sum::<f32>(), 5.0);
    }

    #[test]
    fn test_compress_empty_input() {
        let (ptr, indices, out) = compress(&[], &[], &[], 3, 2, true, "row", "col").unwrap();
        assert_eq!(ptr, vec![0, 0, 0, 0]);
        assert!(indices.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_compress_rejects_length_mismatch() {
        let err = compress(&[0], &[0, 1], &[1.0, 2.0], 2, 2, false, "row", "col").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_compress_rejects_out_of_range_index() {
        let err = compress(&[2], &[0], &[1.0], 2, 2, false, "row", "col").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        let err = compress(&[0], &[5], &[1.0], 2, 2, false, "row", "col").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    }
}
