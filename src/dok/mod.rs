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

//! Dictionary-Of-Keys sparse matrix construction.
//!
//! A [`DokMatrix`] stores each element in an [`OpenHashMap`] keyed by the
//! packed (row, column) coordinate from [`coords`]. This favors incremental
//! construction — random-order inserts and updates are hash-table
//! operations — over structured traversal, which compressed formats serve
//! better.
//!
//! # Usage
//!
//! ```rust
//! # use dokmatrix::DokMatrix;
//! let mut matrix = DokMatrix::new();
//! matrix.set(0, 0, 1.5);
//! matrix.set(1, 2, 3.25);
//! assert_eq!(matrix.nnz(), 2);
//! assert_eq!(matrix.num_cols(), 3);
//!
//! let csr = matrix.to_csr();
//! assert_eq!(csr.get(1, 2), 3.25);
//! ```

pub mod coords;
mod matrix;
mod open_hash_map;

pub use self::matrix::DokMatrix;
pub use self::open_hash_map::Entries;
pub use self::open_hash_map::OpenHashMap;
