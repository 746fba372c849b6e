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

//! A merging t-digest for streaming quantile estimation.
//!
//! The [`TDigest`](tdigest::TDigest) ingests weighted samples and keeps a bounded
//! set of centroids from which quantiles and cumulative distribution values can be
//! approximated, with accuracy concentrated at the tails of the distribution.
//!
//! ```rust
//! # use tdigest_merging::tdigest::TDigest;
//! let mut digest = TDigest::new(100).unwrap();
//! for i in 1..=1000 {
//!     digest.add(i as f64, 1);
//! }
//! let median = digest.quantile(0.5);
//! assert!((median - 500.0).abs() < 10.0);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod tdigest;
