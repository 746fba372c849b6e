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
use super::centroid::centroid_cmp;
use super::sketch::TDigest;

impl TDigest {
    /// Folds all buffered points into the centroids.
    ///
    /// Does nothing if no points are buffered.
    pub fn compress(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let mut unmerged = Vec::with_capacity(self.buffer.len());
        let mut unmerged_weight: i64 = 0;
        for p in self.buffer.drain(..) {
            unmerged.push(Centroid {
                mean: p.value,
                weight: p.weight,
            });
            unmerged_weight = unmerged_weight.saturating_add(p.weight);
        }
        self.weight = self.weight.saturating_add(unmerged_weight);
        unmerged.sort_unstable_by(centroid_cmp);

        // the output never holds more centroids than the walk consumes
        let capacity = self.size.min(unmerged.len() + self.centroids.len());
        let mut acc = Accumulator::new(self.compression, self.weight, capacity);
        let mut i = 0;
        let mut j = 0;
        while i < unmerged.len() && j < self.centroids.len() {
            let a = unmerged[i];
            let b = self.centroids[j];
            // ties go to the incoming points
            if a.mean <= b.mean {
                acc.merge_centroid(a);
                i += 1;
            } else {
                acc.merge_centroid(b);
                j += 1;
            }
        }
        for &c in &unmerged[i..] {
            acc.merge_centroid(c);
        }
        for &c in &self.centroids[j..] {
            acc.merge_centroid(c);
        }

        let Accumulator {
            mut centroids,
            min,
            max,
            ..
        } = acc;
        if centroids.last().is_some_and(|c| c.weight == 0) {
            centroids.pop();
        }
        self.min = self.min.min(min);
        self.max = self.max.max(max);
        self.centroids = centroids;
        self.compression_count += 1;

        log::trace!(
            "compressed {} points into {} centroids (weight={}, compressions={})",
            unmerged.len(),
            self.centroids.len(),
            self.weight,
            self.compression_count
        );
    }
}

/// Running state of the merge walk over sorted centroids.
struct Accumulator {
    compression: f64,
    total_weight: f64,
    centroids: Vec<Centroid>,
    weight_so_far: f64,
    k1: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn new(compression: u32, total_weight: i64, capacity: usize) -> Self {
        let mut centroids = Vec::with_capacity(capacity);
        centroids.push(Centroid::EMPTY);
        Accumulator {
            compression: compression as f64,
            total_weight: total_weight as f64,
            centroids,
            weight_so_far: 0.,
            k1: 0.,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn merge_centroid(&mut self, c: Centroid) {
        let w = c.weight as f64;
        self.weight_so_far += w;
        let k2 = scale_function::k(self.compression, self.weight_so_far / self.total_weight);

        if k2 - self.k1 > 1. && self.current().weight != 0 {
            self.centroids.push(Centroid::EMPTY);
            self.k1 = scale_function::k(
                self.compression,
                (self.weight_so_far - w) / self.total_weight,
            );
        }
        self.current().add(c);

        if c.weight > 0 {
            self.min = self.min.min(c.mean);
            self.max = self.max.max(c.mean);
        }
    }

    fn current(&mut self) -> &mut Centroid {
        let last = self.centroids.len() - 1;
        &mut self.centroids[last]
    }
}

/// Maps a cumulative weight fraction to a cluster index.
///
/// The arcsine shape makes the index change fastest near `q = 0` and `q = 1`, so
/// clusters at the tails stay small while clusters near the median may grow.
mod scale_function {
    use std::f64::consts::PI;

    pub(super) fn k(compression: f64, q: f64) -> f64 {
        compression * ((2. * q - 1.).asin() + PI / 2.) / PI
    }

}
