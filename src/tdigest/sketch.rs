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

use std::f64::consts::PI;

use super::centroid::Centroid;
use crate::error::Error;

/// A sample staged for the next compression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) value: f64,
    pub(super) weight: i64,
}

/// Merging t-digest for estimating quantiles and cumulative distribution values.
///
/// See the [module documentation](super) for more details.
#[derive(Debug, Clone, PartialEq)]
pub struct TDigest {
    pub(super) compression: u32,
    pub(super) size: usize,
    pub(super) threshold: f64,

    pub(super) weight: i64,
    pub(super) min: f64,
    pub(super) max: f64,

    pub(super) buffer: Vec<Point>,
    pub(super) centroids: Vec<Centroid>,
    pub(super) compression_count: u64,
}

impl Default for TDigest {
    fn default() -> Self {
        TDigest::make(Self::DEFAULT_COMPRESSION)
    }
}

impl TDigest {
    /// The default compression if one is not specified.
    pub const DEFAULT_COMPRESSION: u32 = 400;

    /// Creates a digest with the given compression.
    ///
    /// Higher compression keeps more centroids, trading memory for accuracy.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) if
    /// `compression` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tdigest_merging::tdigest::TDigest;
    /// let digest = TDigest::new(100).unwrap();
    /// assert_eq!(digest.compression(), 100);
    /// assert_eq!(digest.size(), 159);
    /// assert!(TDigest::new(0).is_err());
    /// ```
    pub fn new(compression: u32) -> Result<Self, Error> {
        if compression == 0 {
            return Err(Error::config_invalid("compression must be positive")
                .with_context("compression", compression));
        }
        Ok(Self::make(compression))
    }

    fn make(compression: u32) -> Self {
        let c = compression as f64;
        let size = (c * PI / 2.).ceil() as usize + 1;
        let threshold = 7.5 + 0.37 * c - 2e-4 * c * c;
        log::debug!("created t-digest: compression={compression}, size={size}, threshold={threshold}");

        TDigest {
            compression,
            size,
            threshold,
            weight: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            buffer: Vec::with_capacity(threshold.max(0.) as usize + 1),
            centroids: Vec::new(),
            compression_count: 0,
        }
    }

    /// Adds a sample with the given weight.
    ///
    /// Zero weights and `NaN` values are ignored. Negative weights are accepted and
    /// subtract from the totals. Weight totals saturate at the bounds of `i64`.
    pub fn add(&mut self, value: f64, weight: i64) {
        if weight == 0 || value.is_nan() {
            return;
        }

        self.buffer.push(Point { value, weight });
        if weight > 0 {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }

        if self.buffer.len() as f64 > self.threshold {
            self.compress();
        }
    }

    /// Adds a sample with unit weight.
    pub fn update(&mut self, value: f64) {
        self.add(value, 1);
    }

    /// Merges `other` into this digest.
    ///
    /// Every buffered point and every centroid of `other` is re-added to this digest
    /// as a fresh sample, so totals are exact while cluster boundaries are recomputed.
    /// `other` is left untouched.
    pub fn merge(&mut self, other: &TDigest) {
        log::debug!(
            "merging t-digest: {} buffered points, {} centroids",
            other.buffer.len(),
            other.centroids.len()
        );
        for p in &other.buffer {
            self.add(p.value, p.weight);
        }
        for c in &other.centroids {
            self.add(c.mean, c.weight);
        }
    }

    /// Returns the compression used to configure this digest.
    pub fn compression(&self) -> u32 {
        self.compression
    }

    /// Returns the maximum number of centroids retained after a compression.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of buffered points above which a compression is triggered.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the number of compressions performed so far.
    pub fn compression_count(&self) -> u64 {
        self.compression_count
    }

    /// Returns the number of points waiting for the next compression.
    pub fn num_buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the digest has not seen any data.
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty() && self.buffer.is_empty()
    }

    /// Returns the total weight, including points not yet compressed.
    ///
    /// Saturates at the bounds of `i64`.
    pub fn total_weight(&self) -> i64 {
        self.buffer
            .iter()
            .fold(self.weight, |acc, p| acc.saturating_add(p.weight))
    }

    /// Returns the minimum value seen by the digest.
    pub fn min_value(&self) -> Option<f64> {
        if self.min <= self.max {
            Some(self.min)
        } else {
            None
        }
    }

    /// Returns the maximum value seen by the digest.
    pub fn max_value(&self) -> Option<f64> {
        if self.min <= self.max {
            Some(self.max)
        } else {
            None
        }
    }

    /// Compresses pending points and returns the centroids, sorted by mean.
    pub fn centroids(&mut self) -> &[Centroid] {
        self.compress();
        &self.centroids
    }
}
