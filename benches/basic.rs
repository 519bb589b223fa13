//! Compares `FixedVec` against `Vec` and `SmallVec` on the basic operations.
//!
//! Every container is given enough capacity up front, so no run ever reallocates:
//! what is measured is the element bookkeeping itself.

use core::hint;
use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use fixed_vector::FixedVec;
use smallvec::SmallVec;
use std::sync::OnceLock;

use rand::Rng;

const SMALL_SIZE: usize = 16;
const MEDIUM_SIZE: usize = 512;

/// A function used to generate a random amount of data.
///
/// Random data keeps the compiler from specializing the loops
/// on lengths and indices it would otherwise know at compile time.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// The amount of data used in small data testing, in `14..16`.
static SMALL_BOUND: OnceLock<usize> = OnceLock::new();

/// The amount of data used in medium data testing, in `500..503`.
static MEDIUM_BOUND: OnceLock<usize> = OnceLock::new();

/// Generate an array of random content of a specified length.
#[inline(never)]
fn gen_rand(len: usize, start: u64, end: u64) -> Box<[u64]> {
    let mut rng = rand::rng();
    let mut vec: Vec<u64> = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(rng.random_range(start..end));
    }
    vec.into_boxed_slice()
}

/// The common surface of the measured containers.
trait VecLike {
    fn with_room() -> Self;
    fn push(&mut self, value: u64);
    fn pop(&mut self) -> Option<u64>;
    fn insert(&mut self, index: usize, value: u64);
    fn remove(&mut self, index: usize) -> u64;
    fn erase(&mut self, start: usize, end: usize);
    fn extend_from(&mut self, data: &[u64]);
    fn get_mut(&mut self, index: usize) -> &mut u64;
    /// Used for quickly setting vector contents during testing.
    ///
    /// We use u64 testing and do not need to call [`Drop`].
    fn set_len(&mut self, len: usize);
}

macro_rules! impl_vec_like {
    ($name:ty, $cap:expr, $with_room:expr) => {
        impl VecLike for $name {
            #[inline(always)]
            fn with_room() -> Self {
                $with_room($cap)
            }
            #[inline(always)]
            fn push(&mut self, value: u64) {
                <$name>::push(self, value)
            }
            #[inline(always)]
            fn pop(&mut self) -> Option<u64> {
                <$name>::pop(self)
            }
            #[inline(always)]
            fn insert(&mut self, index: usize, value: u64) {
                <$name>::insert(self, index, value);
            }
            #[inline(always)]
            fn remove(&mut self, index: usize) -> u64 {
                <$name>::remove(self, index)
            }
            #[inline(always)]
            fn erase(&mut self, start: usize, end: usize) {
                self.drain(start..end);
            }
            #[inline(always)]
            fn extend_from(&mut self, data: &[u64]) {
                self.extend_from_slice(data);
            }
            #[inline(always)]
            fn get_mut(&mut self, index: usize) -> &mut u64 {
                &mut self[index]
            }
            #[inline(always)]
            fn set_len(&mut self, len: usize) {
                unsafe {
                    <$name>::set_len(self, len);
                }
            }
        }
    };
}

impl_vec_like!(Vec<u64>, SMALL_SIZE, Vec::with_capacity);
impl_vec_like!(SmallVec<u64, SMALL_SIZE>, SMALL_SIZE, SmallVec::with_capacity);
impl_vec_like!(SmallVec<u64, MEDIUM_SIZE>, MEDIUM_SIZE, SmallVec::with_capacity);

macro_rules! impl_fixed_vec_like {
    ($cap:ident) => {
        impl VecLike for FixedVec<u64, $cap> {
            #[inline(always)]
            fn with_room() -> Self {
                Self::new()
            }
            #[inline(always)]
            fn push(&mut self, value: u64) {
                FixedVec::push(self, value)
            }
            #[inline(always)]
            fn pop(&mut self) -> Option<u64> {
                FixedVec::pop(self)
            }
            #[inline(always)]
            fn insert(&mut self, index: usize, value: u64) {
                FixedVec::insert(self, index, value);
            }
            #[inline(always)]
            fn remove(&mut self, index: usize) -> u64 {
                FixedVec::remove(self, index)
            }
            #[inline(always)]
            fn erase(&mut self, start: usize, end: usize) {
                FixedVec::erase(self, start..end);
            }
            #[inline(always)]
            fn extend_from(&mut self, data: &[u64]) {
                self.extend_from_copy_slice(data);
            }
            #[inline(always)]
            fn get_mut(&mut self, index: usize) -> &mut u64 {
                &mut self[index]
            }
            #[inline(always)]
            fn set_len(&mut self, len: usize) {
                unsafe {
                    FixedVec::set_len(self, len);
                }
            }
        }
    };
}

impl_fixed_vec_like!(SMALL_SIZE);
impl_fixed_vec_like!(MEDIUM_SIZE);

/// `Vec` sized for the medium runs.
struct MediumVec(Vec<u64>);

impl VecLike for MediumVec {
    #[inline(always)]
    fn with_room() -> Self {
        Self(Vec::with_capacity(MEDIUM_SIZE))
    }
    #[inline(always)]
    fn push(&mut self, value: u64) {
        self.0.push(value)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<u64> {
        self.0.pop()
    }
    #[inline(always)]
    fn insert(&mut self, index: usize, value: u64) {
        self.0.insert(index, value);
    }
    #[inline(always)]
    fn remove(&mut self, index: usize) -> u64 {
        self.0.remove(index)
    }
    #[inline(always)]
    fn erase(&mut self, start: usize, end: usize) {
        self.0.drain(start..end);
    }
    #[inline(always)]
    fn extend_from(&mut self, data: &[u64]) {
        self.0.extend_from_slice(data);
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.0[index]
    }
    #[inline(always)]
    fn set_len(&mut self, len: usize) {
        unsafe {
            self.0.set_len(len);
        }
    }
}

macro_rules! gen_bench_group {
    (Small, $c:ident => $fn_name:ident) => {{
        let mut group_new = $c.benchmark_group(concat!(stringify!($fn_name), "_small"));
        let bound = *SMALL_BOUND.get().unwrap();
        group_new.bench_function("Vec", |b| $fn_name::<Vec<u64>>(b, bound));
        group_new.bench_function("SmallVec", |b| {
            $fn_name::<SmallVec<u64, SMALL_SIZE>>(b, bound)
        });
        group_new.bench_function("FixedVec", |b| {
            $fn_name::<FixedVec<u64, SMALL_SIZE>>(b, bound)
        });
    }};
    (Medium, $c:ident => $fn_name:ident) => {{
        let mut group_new = $c.benchmark_group(concat!(stringify!($fn_name), "_medium"));
        let bound = *MEDIUM_BOUND.get().unwrap();
        group_new.bench_function("Vec", |b| $fn_name::<MediumVec>(b, bound));
        group_new.bench_function("SmallVec", |b| {
            $fn_name::<SmallVec<u64, MEDIUM_SIZE>>(b, bound)
        });
        group_new.bench_function("FixedVec", |b| {
            $fn_name::<FixedVec<u64, MEDIUM_SIZE>>(b, bound)
        });
    }};
}

fn bench_vec(c: &mut Criterion) {
    SMALL_BOUND.get_or_init(|| gen_one(14, 16));
    MEDIUM_BOUND.get_or_init(|| gen_one(500, 503));
    gen_bench_group!(Small, c => new_empty);
    gen_bench_group!(Small, c => push);
    gen_bench_group!(Medium, c => push);
    gen_bench_group!(Small, c => extend);
    gen_bench_group!(Medium, c => extend);
    gen_bench_group!(Small, c => pop);
    gen_bench_group!(Medium, c => pop);
    gen_bench_group!(Small, c => insert);
    gen_bench_group!(Medium, c => insert);
    gen_bench_group!(Small, c => remove);
    gen_bench_group!(Medium, c => remove);
    gen_bench_group!(Small, c => erase);
    gen_bench_group!(Medium, c => erase);
    gen_bench_group!(Small, c => index);
    gen_bench_group!(Medium, c => index);
}

/// Creation time of an empty container with room for the whole run.
///
/// Only `Vec` needs to apply for heap memory.
#[inline(never)]
fn new_empty<T: VecLike>(b: &mut Bencher, _bound: usize) {
    b.iter(|| hint::black_box(T::with_room()));
}

/// Test the efficiency of `push` one element at a time.
#[inline(never)]
fn push<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    let data = gen_rand(bound, 0, 9999);
    let index = gen_one(0, bound);

    b.iter(|| {
        // Randomly collect internal data to avoid
        // compiler optimization of these non output codes.
        let mut counter = 0u64;
        vec.set_len(0);
        for item in &data {
            vec.push(*item);
        }
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test appending a whole slice; `FixedVec` uses its block copy path.
#[inline(never)]
fn extend<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    let data = gen_rand(bound, 0, 9999);
    let index = gen_one(0, bound);

    b.iter(|| {
        let mut counter = 0u64;
        vec.set_len(0);
        vec.extend_from(&data);
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test `pop` efficiency.
#[inline(never)]
fn pop<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();

    b.iter(|| {
        let mut counter = 0u64;
        vec.set_len(bound);
        for _ in 1..bound {
            unsafe {
                counter += vec.pop().unwrap_unchecked();
            }
        }
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test `insert` at four scattered positions.
#[inline(never)]
fn insert<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    let base = bound - 4;
    let index = gen_one(0, base);

    b.iter(|| {
        let mut counter = 0u64;
        vec.set_len(base);
        vec.insert((bound + 4) % base, 6);
        vec.insert((bound + 7) % (base + 1), 7);
        vec.insert((bound + 9) % (base + 2), 8);
        vec.insert((bound + 14) % (base + 3), 11);
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test `remove` at four scattered positions.
#[inline(never)]
fn remove<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    let index = gen_one(0, bound - 4);

    b.iter(|| {
        let mut counter = 0u64;
        vec.set_len(bound);
        counter += vec.remove((bound + 14) % bound);
        counter += vec.remove((bound + 9) % (bound - 1));
        counter += vec.remove((bound + 7) % (bound - 2));
        counter += vec.remove((bound + 4) % (bound - 3));
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test erasing a range from the middle, closing the gap.
#[inline(never)]
fn erase<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    let start = gen_one(0, bound / 2);
    let end = start + bound / 4;
    let index = gen_one(0, bound - bound / 4);

    b.iter(|| {
        let mut counter = 0u64;
        vec.set_len(bound);
        vec.erase(start, end);
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

/// Test indexed access.
#[inline(never)]
fn index<T: VecLike>(b: &mut Bencher, bound: usize) {
    let mut vec = T::with_room();
    vec.set_len(bound);

    let index = gen_one(0, bound);
    let range = gen_rand(10, 0, bound as u64);

    b.iter(|| {
        let mut counter = 0u64;
        for item in &range {
            *vec.get_mut(*item as usize) += *item;
        }
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
    vec.set_len(0);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(500)
        .warm_up_time(core::time::Duration::from_secs(3))
        .measurement_time(core::time::Duration::from_secs(12))
        .confidence_level(0.96)
        .noise_threshold(0.04);
    targets = bench_vec,
}
criterion_main!(benches);
