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

use googletest::assert_that;
use googletest::prelude::near;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tdigest_merging::tdigest::TDigest;

#[test]
fn test_merge_weight() {
    let mut primary = TDigest::default();
    let mut secondary = TDigest::default();
    for i in 0..1000 {
        secondary.update(i as f64);
    }
    assert_eq!(primary.total_weight(), 0);
    assert_eq!(secondary.total_weight(), 1000);

    primary.merge(&secondary);
    assert_eq!(primary.total_weight(), 1000);
    assert_eq!(primary.min_value(), Some(0.0));
    assert_eq!(primary.max_value(), Some(999.0));
}

#[test]
fn test_merge_leaves_source_untouched() {
    let mut primary = TDigest::new(100).unwrap();
    let mut secondary = TDigest::new(100).unwrap();
    for i in 0..200 {
        primary.update(i as f64);
        secondary.add(i as f64 + 0.5, 2);
    }
    let before = secondary.clone();

    primary.merge(&secondary);
    assert_eq!(secondary, before);
    assert_eq!(primary.total_weight(), 600);
}

#[test]
fn test_merge_buffered_points() {
    let mut primary = TDigest::default();
    let mut secondary = TDigest::default();
    for i in 0..10 {
        secondary.add(i as f64, 3);
    }
    assert_eq!(secondary.num_buffered(), 10);

    primary.merge(&secondary);
    assert_eq!(secondary.num_buffered(), 10);
    assert_eq!(primary.total_weight(), 30);
    assert_eq!(primary.quantile(0.0), 0.0);
    assert_eq!(primary.quantile(1.0), 9.0);
}

#[test]
fn test_merge_empty() {
    let mut primary = TDigest::default();
    primary.update(1.0);
    primary.merge(&TDigest::default());
    assert_eq!(primary.total_weight(), 1);
    assert_eq!(primary.quantile(0.5), 1.0);
}

#[test]
fn test_merge_approximates_union() {
    const N: usize = 10_000;

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<f64> = (0..N).map(|i| i as f64).collect();
    values.shuffle(&mut rng);

    let mut left = TDigest::new(100).unwrap();
    let mut right = TDigest::new(100).unwrap();
    let mut union = TDigest::new(100).unwrap();
    for (i, &v) in values.iter().enumerate() {
        if i < N / 2 {
            left.update(v);
        } else {
            right.update(v);
        }
        union.update(v);
    }

    left.merge(&right);
    assert_eq!(left.total_weight(), union.total_weight());
    assert_eq!(left.min_value(), union.min_value());
    assert_eq!(left.max_value(), union.max_value());
    for i in 1..10 {
        let q = i as f64 / 10.;
        assert_that!(left.quantile(q), near(union.quantile(q), 100.0));
    }
}
