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

//! Packing of (row, column) coordinate pairs into 64-bit keys.
//!
//! The row occupies the high 32 bits and the column the low 32 bits, so
//! distinct pairs always map to distinct keys over the full `u32` range.

/// Pack a (row, column) pair into a single 64-bit key.
#[inline]
pub const fn pack(row: u32, col: u32) -> u64 {
    ((row as u64) << 32) | col as u64
}

/// Unpack a 64-bit key into its (row, column) pair. Exact inverse of [`pack`].
#[inline]
pub const fn unpack(key: u64) -> (u32, u32) {
    (row_of(key), col_of(key))
}

/// Extract the row (high 32 bits) from a packed key.
#[inline]
pub const fn row_of(key: u64) -> u32 {
    (key >> 32) as u32
}

/// Extract the column (low 32 bits) from a packed key.
#[inline]
pub const fn col_of(key: u64) -> u32 {
    key as u32
}
