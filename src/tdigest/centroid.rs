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

use std::cmp::Ordering;

/// A weighted cluster center of a [`TDigest`](super::TDigest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub(super) mean: f64,
    pub(super) weight: i64,
}

impl Centroid {
    pub(super) const EMPTY: Centroid = Centroid {
        mean: 0.,
        weight: 0,
    };

    /// Returns the mean of the samples folded into this centroid.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the total weight of the samples folded into this centroid.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Folds `other` into this centroid with an incremental weighted mean update.
    pub(super) fn add(&mut self, other: Centroid) {
        self.weight = self.weight.saturating_add(other.weight);
        if self.weight != 0 {
            self.mean += (other.mean - self.mean) * (other.weight as f64) / (self.weight as f64);
        }
    }
}

pub(super) fn centroid_cmp(a: &Centroid, b: &Centroid) -> Ordering {
    a.mean.total_cmp(&b.mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_into_empty() {
        let mut c = Centroid::EMPTY;
        c.add(Centroid {
            mean: 3.5,
            weight: 2,
        });
        assert_eq!(c.mean(), 3.5);
        assert_eq!(c.weight(), 2);
    }

    #[test]
    fn test_add_weighted_mean() {
        let mut c = Centroid {
            mean: 1.0,
            weight: 1,
        };
        c.add(Centroid {
            mean: 4.0,
            weight: 2,
        });
        assert_eq!(c.weight(), 3);
        assert_eq!(c.mean(), 3.0);
    }

    #[test]
    fn test_add_cancelling_weight_keeps_mean() {
        let mut c = Centroid {
            mean: 2.0,
            weight: 3,
        };
        c.add(Centroid {
            mean: 10.0,
            weight: -3,
        });
        assert_eq!(c.weight(), 0);
        assert_eq!(c.mean(), 2.0);
    }
}
