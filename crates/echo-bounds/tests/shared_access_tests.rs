// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Cross-thread use: shared reads are free, shared growth goes through a lock.

use std::sync::{Arc, Mutex};
use std::thread;

use echo_bounds::Aabb;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn aabb_is_send_and_sync() {
    assert_send_sync::<Aabb>();
}

#[test]
fn concurrent_growth_behind_a_mutex_sees_every_point() {
    let shared = Arc::new(Mutex::new(Aabb::empty()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    let v = f64::from(t * 100 + i);
                    shared.lock().expect("lock").add_point(v, -v);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker");
    }
    let b = *shared.lock().expect("lock");
    assert_eq!([b.min_x(), b.max_x(), b.min_y(), b.max_y()], [0.0, 399.0, -399.0, 0.0]);
}

#[test]
fn concurrent_queries_on_a_shared_box() {
    let b = Arc::new(Aabb::from_points([(0.0, 0.0), (4.0, 2.0)]));
    let other = Aabb::from_points([(2.0, 1.0), (6.0, 3.0)]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let b = Arc::clone(&b);
            thread::spawn(move || (b.area(), b.intersect(&other)))
        })
        .collect();
    for h in handles {
        let (area, i) = h.join().expect("worker");
        assert_eq!(area, 8.0);
        assert_eq!([i.min_x(), i.max_x(), i.min_y(), i.max_y()], [2.0, 4.0, 1.0, 2.0]);
    }
}
