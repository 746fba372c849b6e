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

impl IntoIterator for TDigest {
    type Item = (f64, i64);
    type IntoIter = TDigestIntoIter;

    /// Compresses pending points and iterates over the `(mean, weight)` of each
    /// centroid in ascending mean order.
    fn into_iter(mut self) -> Self::IntoIter {
        self.compress();
        TDigestIntoIter {
            centroids: self.centroids.into_iter(),
        }
    }
}

/// Iterator over the centroids of a TDigest.
#[derive(Debug)]
pub struct TDigestIntoIter {
    centroids: std::vec::IntoIter<Centroid>,
}

impl Iterator for TDigestIntoIter {
    type Item = (f64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.centroids.next().map(|c| (c.mean, c.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.centroids.size_hint()
    }
}

impl ExactSizeIterator for TDigestIntoIter {}

impl Extend<(f64, i64)> for TDigest {
    fn extend<I: IntoIterator<Item = (f64, i64)>>(&mut self, iter: I) {
        for (value, weight) in iter {
            self.add(value, weight);
        }
    }
}

impl FromIterator<(f64, i64)> for TDigest {
    /// Builds a digest with the default compression from `(value, weight)` samples.
    fn from_iter<I: IntoIterator<Item = (f64, i64)>>(iter: I) -> Self {
        let mut tdigest = TDigest::default();
        tdigest.extend(iter);
        tdigest
    }
}
