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

//! Merging t-digest for estimating quantiles and cumulative distribution values.
//!
//! A t-digest summarizes a stream of weighted samples as a sorted array of
//! centroids. New samples are staged in an unsorted buffer; once the buffer grows
//! past a threshold derived from the compression parameter, the buffer is sorted
//! and merged with the existing centroids. Cluster sizes are bounded by an arcsine
//! scale function, so centroids near the extremes stay small and the tails are
//! estimated more accurately than the middle of the distribution.
//!
//! The structure is single-writer: every mutating call takes `&mut self`. Digests
//! built on separate workers can be combined later with [`TDigest::merge`].
//!
//! # Usage
//!
//! ```rust
//! # use tdigest_merging::tdigest::TDigest;
//! let mut digest = TDigest::new(100).unwrap();
//! digest.add(5.0, 1);
//! assert_eq!(digest.quantile(0.5), 5.0);
//! assert_eq!(digest.cdf(5.0), 0.5);
//! ```

mod centroid;
mod compress;
mod iter;
mod query;
mod sketch;

pub use self::centroid::Centroid;
pub use self::iter::TDigestIntoIter;
pub use self::sketch::TDigest;
