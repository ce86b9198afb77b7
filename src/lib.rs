// Discrete-event simulation of M/M/c/k queueing systems: an arrival stream
// feeds a bounded FIFO waiting line, which feeds a pool of servers arranged
// as a min-heap on their next-free clocks. The simulation publishes two
// labeled streams of customer records, rejected and departed.

extern crate ordered_float;
extern crate rand;

pub mod distribution;
pub mod helpers;
pub mod queues;
pub mod stats;

use rand::distributions::Exp;

pub use queues::arrival::{Generator, TraceArrival};
pub use queues::customer::Customer;
pub use queues::file_logger::FileLogger;
pub use queues::minheap::MinheapService;
pub use queues::pipeline::{run, run_with_buffers, Outcome, Simulation};
pub use queues::ring::Ring;
pub use queues::{Arrival, ConfigError, Line, Service};

// Default builders. Custom stages plug in through Generator::new,
// Ring::new and MinheapService::from_sources instead.

pub fn exp_arrival(rate: f64) -> Result<Generator<Exp>, ConfigError> {
    if rate <= 0. {
        return Err(ConfigError::NonPositiveRate(rate));
    }
    Ok(Generator::new(Exp::new(rate)))
}

pub fn bounded_line(capacity: usize) -> Ring {
    Ring::new(capacity)
}

pub fn exp_pool(nservers: usize, rate: f64) -> Result<MinheapService<Exp>, ConfigError> {
    if rate <= 0. {
        return Err(ConfigError::NonPositiveRate(rate));
    }
    MinheapService::from_sources(vec![Exp::new(rate); nservers])
}
