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

//! Sparse `f32` matrices built incrementally as a Dictionary-Of-Keys.
//!
//! # Overview
//!
//! A [`DokMatrix`] keeps every element in an open-addressing hash table
//! keyed by the packed (row, column) coordinate, which makes random-order
//! construction cheap: writing an element is a single hash-table operation
//! wherever it lands. Once built, a matrix converts in one shot into the
//! compressed layouts linear-algebra consumers want to traverse:
//!
//! - [`CsrMatrix`]: row-major, contiguous per-row column/value spans
//! - [`CscMatrix`]: column-major, contiguous per-column row/value spans
//!
//! Absent elements read as `0.0` and are never stored, so memory scales
//! with the number of written elements rather than the matrix extent.
//! Matrices are either growable (bounds extend to cover any written
//! position) or fixed-shape (writes are range-checked), selected by
//! constructor.
//!
//! # Usage
//!
//! ```rust
//! # use dokmatrix::DokMatrix;
//! let mut matrix = DokMatrix::new();
//! matrix.set(0, 0, 1.5);
//! matrix.set(1, 2, 3.25);
//! matrix.set(2, 1, -4.0);
//!
//! assert_eq!(matrix.nnz(), 3);
//! assert_eq!(matrix.get(1, 1), 0.0);
//!
//! let csr = matrix.to_csr();
//! let (cols, values) = csr.row(1);
//! assert_eq!(cols, &[2]);
//! assert_eq!(values, &[3.25]);
//! ```
//!
//! All types are single-threaded mutable state; share them across threads
//! only behind external synchronization.

pub mod compressed;
pub mod dok;
pub mod error;
pub mod vector;

pub use compressed::CscMatrix;
pub use compressed::CsrMatrix;
pub use dok::DokMatrix;
pub use dok::OpenHashMap;
pub use vector::DenseFloatVector;
pub use vector::FloatVector;
