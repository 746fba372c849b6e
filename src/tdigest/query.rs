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

use super::centroid::Centroid;
use super::sketch::TDigest;

impl TDigest {
    /// Returns the approximate fraction of the total weight at or below `value`.
    ///
    /// Pending points are compressed first. Returns `NaN` if the digest is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tdigest_merging::tdigest::TDigest;
    /// let mut digest = TDigest::default();
    /// assert!(digest.cdf(1.0).is_nan());
    /// for i in 1..=100 {
    ///     digest.update(i as f64);
    /// }
    /// assert_eq!(digest.cdf(0.0), 0.0);
    /// assert_eq!(digest.cdf(101.0), 1.0);
    /// ```
    pub fn cdf(&mut self, value: f64) -> f64 {
        self.compress();

        if self.centroids.is_empty() {
            return f64::NAN;
        }
        if value < self.min {
            return 0.;
        }
        if value > self.max {
            return 1.;
        }
        if self.centroids.len() == 1 {
            if float_eq(self.max, self.min) {
                return 0.5;
            }
            return interpolate(value, self.min, self.max);
        }

        let total_weight = self.weight as f64;
        let mut weight_so_far = 0.;
        // the walk starts from a weightless centroid sitting on the minimum
        let mut a = Centroid {
            mean: self.min,
            weight: 0,
        };
        let mut b = a;
        let mut right = 0.;
        let mut left;

        for &c in &self.centroids {
            left = b.mean - (a.mean + right);
            a = b;
            b = c;
            right = (b.mean - a.mean) * (a.weight as f64) / (a.weight as f64 + b.weight as f64);

            if value < a.mean + right {
                let cdf = (weight_so_far
                    + (a.weight as f64) * interpolate(value, a.mean - left, a.mean + right))
                    / total_weight;
                return cdf.max(0.);
            }

            weight_so_far += a.weight as f64;
        }

        left = b.mean - (a.mean + right);
        a = b;
        right = self.max - a.mean;

        if value < a.mean + right {
            return (weight_so_far
                + (a.weight as f64) * interpolate(value, a.mean - left, a.mean + right))
                / total_weight;
        }

        1.
    }

    /// Returns the approximate value below which the fraction `q` of the total
    /// weight lies.
    ///
    /// Pending points are compressed first. Returns `NaN` if the digest is empty.
    ///
    /// # Panics
    ///
    /// If `q` is not in [0.0, 1.0].
    pub fn quantile(&mut self, q: f64) -> f64 {
        assert!((0.0..=1.0).contains(&q), "q must be in [0.0, 1.0], got {q}");
        self.compress();

        if self.centroids.is_empty() {
            return f64::NAN;
        }
        if float_eq(q, 0.) {
            return self.min;
        }
        if float_eq(q, 1.) {
            return self.max;
        }
        if self.centroids.len() == 1 {
            return self.centroids[0].mean;
        }

        let idx = q * (self.weight as f64);
        let mut weight_so_far = 0.;
        let mut a;
        let mut b = Centroid {
            mean: self.min,
            weight: 0,
        };
        let mut left;
        let mut right = self.min;

        for &c in &self.centroids {
            a = b;
            left = right;
            b = c;
            right = weighted_midpoint(a, b);

            let wa = a.weight as f64;
            if idx < weight_so_far + wa {
                let p = (idx - weight_so_far) / wa;
                return left * (1. - p) + right * p;
            }

            weight_so_far += wa;
        }

        left = right;
        a = b;
        right = self.max;

        let wa = a.weight as f64;
        if idx < weight_so_far + wa {
            let p = (idx - weight_so_far) / wa;
            return left * (1. - p) + right * p;
        }

        self.max
    }

    /// Returns the approximate value at percentile `p`, i.e. `quantile(p / 100)`.
    ///
    /// # Panics
    ///
    /// If `p` is not in [0.0, 100.0].
    pub fn percentile(&mut self, p: f64) -> f64 {
        assert!(
            (0.0..=100.0).contains(&p),
            "p must be in [0.0, 100.0], got {p}"
        );
        self.quantile(p / 100.)
    }
}

fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= f32::EPSILON as f64
}

/// Position of `x` within `[x0, x1]`, as a fraction.
fn interpolate(x: f64, x0: f64, x1: f64) -> f64 {
    (x - x0) / (x1 - x0)
}

/// Boundary between two adjacent centroids; the heavier one gets the wider span.
fn weighted_midpoint(a: Centroid, b: Centroid) -> f64 {
    let (wa, wb) = (a.weight as f64, b.weight as f64);
    (wb * a.mean + wa * b.mean) / (wa + wb)
}
