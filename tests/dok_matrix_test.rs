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

use dokmatrix::DokMatrix;

fn read_row(matrix: &DokMatrix, row: usize) -> Vec<f32> {
    let mut dst = vec![0.0f32; matrix.num_cols()];
    matrix.read_row_into(row, &mut dst);
    dst
}

fn sample_3x3() -> DokMatrix {
    let mut matrix = DokMatrix::new();
    matrix.set(0, 0, 1.5);
    matrix.set(1, 2, 3.25);
    matrix.set(2, 1, -4.0);
    matrix
}

#[test]
fn three_by_three_scenario() {
    let matrix = sample_3x3();

    assert_eq!(matrix.nnz(), 3);
    assert_eq!(matrix.num_rows(), 3);
    assert_eq!(matrix.num_cols(), 3);
    assert_eq!(matrix.get_or(0, 0, 0.0), 1.5);
    assert_eq!(matrix.get_or(1, 1, 0.0), 0.0);

    let csr = matrix.to_csr();
    let (cols, values) = csr.row(1);
    assert_eq!(cols, &[2]);
    assert_eq!(values, &[3.25]);
    assert_eq!(
        (csr.get(1, 0), csr.get(1, 1), csr.get(1, 2)),
        (0.0, 0.0, 3.25)
    );
}

#[test]
fn swap_scenario() {
    let mut matrix = sample_3x3();
    matrix.swap_rows(0, 1);

    assert_eq!(read_row(&matrix, 0), vec![0.0, 0.0, 3.25]);
    assert_eq!(read_row(&matrix, 1), vec![1.5, 0.0, 0.0]);
    assert_eq!(matrix.nnz(), 3);
}

#[test]
fn double_swap_restores_contents() {
    let mut matrix = DokMatrix::new();
    for row in 0..6usize {
        for col in 0..6usize {
            if (row + col) % 3 == 0 {
                matrix.set(row, col, (row * 10 + col) as f32);
            }
        }
    }
    let before: Vec<Vec<f32>> = (0..6).map(|row| read_row(&matrix, row)).collect();
    let nnz = matrix.nnz();

    matrix.swap_rows(1, 4);
    assert_eq!(matrix.nnz(), nnz);
    assert_eq!(read_row(&matrix, 1), before[4]);
    assert_eq!(read_row(&matrix, 4), before[1]);

    matrix.swap_rows(1, 4);
    assert_eq!(matrix.nnz(), nnz);
    let after: Vec<Vec<f32>> = (0..6).map(|row| read_row(&matrix, row)).collect();
    assert_eq!(after, before);
}

#[test]
fn zero_write_preserves_sparsity() {
    let mut matrix = DokMatrix::new();
    matrix.set(3, 7, 0.0);

    assert_eq!(matrix.nnz(), 0);
    assert_eq!(matrix.num_rows(), 0);
    assert_eq!(matrix.num_cols(), 0);
    assert_eq!(matrix.get_or(3, 7, -1.0), -1.0);
}

#[test]
fn nnz_counts_distinct_written_positions() {
    let mut matrix = DokMatrix::new();
    let writes = [
        (0usize, 0usize, 1.0f32),
        (0, 1, 2.0),
        (0, 0, 3.0), // overwrite
        (5, 5, 4.0),
        (0, 1, 0.0), // explicit zero over an existing entry
        (2, 2, 0.0), // no-op: zero to an absent position
    ];
    let mut expected = std::collections::HashSet::new();
    for (row, col, value) in writes {
        matrix.set(row, col, value);
        if value != 0.0 || expected.contains(&(row, col)) {
            expected.insert((row, col));
        }
        assert_eq!(matrix.nnz(), expected.len());
    }
    assert_eq!(matrix.nnz(), 3);
}

#[test]
fn replace_reports_previous_value() {
    let mut matrix = DokMatrix::new();
    assert_eq!(matrix.replace(2, 3, 1.25), 0.0);
    assert_eq!(matrix.replace(2, 3, -1.25), 1.25);
    assert_eq!(matrix.nnz(), 1);
}

#[test]
fn full_traversal_is_complete_and_unique() {
    let mut matrix = DokMatrix::new();
    for i in 0..200usize {
        matrix.set(i % 17, i / 17, (i as f32) + 0.25);
    }

    let mut seen = std::collections::HashSet::new();
    let mut count = 0usize;
    for (row, col, value) in matrix.iter() {
        assert!(seen.insert((row, col)), "cell ({row}, {col}) visited twice");
        assert_eq!(value, matrix.get(row, col));
        count += 1;
    }
    assert_eq!(count, matrix.nnz());
}

#[test]
fn row_and_column_iteration_orderings() {
    let mut matrix = DokMatrix::with_shape(4, 4);
    matrix.set(2, 0, 1.0);
    matrix.set(2, 3, 2.0);
    matrix.set(0, 2, 3.0);
    matrix.set(3, 2, 4.0);

    let row: Vec<(usize, f32)> = matrix.iter_row(2, false).collect();
    assert_eq!(row, vec![(0, 1.0), (3, 2.0)]);

    let row_dense: Vec<(usize, f32)> = matrix.iter_row(2, true).collect();
    assert_eq!(row_dense, vec![(0, 1.0), (1, 0.0), (2, 0.0), (3, 2.0)]);

    let column: Vec<(usize, f32)> = matrix.nonzeros_in_column(2).collect();
    assert_eq!(column, vec![(0, 3.0), (3, 4.0)]);
}

#[test]
fn growable_bounds_extend_monotonically() {
    let mut matrix = DokMatrix::new();
    matrix.set(9, 0, 1.0);
    assert_eq!((matrix.num_rows(), matrix.num_cols()), (10, 1));
    matrix.set(0, 19, 2.0);
    assert_eq!((matrix.num_rows(), matrix.num_cols()), (10, 20));

    // Writes inside the current bounds never shrink them.
    matrix.set(1, 1, 3.0);
    assert_eq!((matrix.num_rows(), matrix.num_cols()), (10, 20));
}

#[test]
#[should_panic(expected = "column index out of range")]
fn fixed_shape_rejects_out_of_range_column() {
    let mut matrix = DokMatrix::with_shape(2, 2);
    matrix.set(0, 2, 1.0);
}

#[test]
fn many_writes_survive_table_growth() {
    let mut matrix = DokMatrix::with_capacity(16);
    for i in 0..50_000usize {
        matrix.set(i % 1000, i / 1000, i as f32 + 1.0);
    }
    assert_eq!(matrix.nnz(), 50_000);
    assert_eq!(matrix.get(999, 49), 50_000.0);
    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(1, 0), 2.0);
}
