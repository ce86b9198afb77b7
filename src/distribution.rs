use rand::distributions::{Distribution, Exp};
use rand::Rng;

use std::cell::RefCell;
use std::rc::Rc;

// A duration source that may mutate its own state on every draw, unlike
// rand's Distribution. Every duration the engine consumes goes through this.
pub trait MutDistribution<T> {
    fn mut_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T;
}

impl MutDistribution<f64> for Exp {
    fn mut_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.sample(rng)
    }
}

// Shared handle, for a source observed through several owners (e.g. one
// scripted source feeding every server of a pool).
impl<T, D> MutDistribution<T> for Rc<RefCell<D>>
where
    D: MutDistribution<T>,
{
    fn mut_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        self.borrow_mut().mut_sample(rng)
    }
}

#[derive(Clone, Debug)]
pub struct ConstantDistribution<T>
where
    T: Copy,
{
    value: T,
}

impl<T> ConstantDistribution<T>
where
    T: Copy,
{
    pub fn new(value: T) -> Self {
        ConstantDistribution { value }
    }
}

impl<T> Distribution<T> for ConstantDistribution<T>
where
    T: Copy,
{
    fn sample<R: Rng + ?Sized>(&self, _: &mut R) -> T {
        self.value
    }
}

impl<T> MutDistribution<T> for ConstantDistribution<T>
where
    T: Copy,
{
    fn mut_sample<R: Rng + ?Sized>(&mut self, _: &mut R) -> T {
        self.value
    }
}

pub struct OffsetExp {
    exp: Exp,
    offset: f64,
}

impl OffsetExp {
    pub fn new(offset: f64, lambda: f64) -> Self {
        OffsetExp {
            exp: Exp::new(lambda),
            offset,
        }
    }
}

impl Distribution<f64> for OffsetExp {
    fn sample<R: Rng + ?Sized>(&self, r: &mut R) -> f64 {
        self.offset + self.exp.sample(r)
    }
}

impl MutDistribution<f64> for OffsetExp {
    fn mut_sample<R: Rng + ?Sized>(&mut self, r: &mut R) -> f64 {
        self.sample(r)
    }
}

// Sum of `shape` independent exponentials of the given rate.
pub struct Erlang {
    shape: usize,
    exp: Exp,
}

impl Erlang {
    pub fn new(shape: usize, rate: f64) -> Self {
        assert!(shape >= 1, "Erlang shape must be at least 1");
        Erlang {
            shape,
            exp: Exp::new(rate),
        }
    }
}

impl MutDistribution<f64> for Erlang {
    fn mut_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let mut total = 0.;
        for _ in 0..self.shape {
            total += self.exp.sample(rng);
        }
        total
    }
}
