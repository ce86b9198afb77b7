use ordered_float::NotNan;
use rand::thread_rng;

use distribution::MutDistribution;
use queues::Arrival;

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Result};

// Draws inter-arrival intervals from any duration distribution. The default
// exponential source is Generator<Exp>, built by exp_arrival(rate).
pub struct Generator<T>
where
    T: MutDistribution<f64>,
{
    iat_distribution: T,
}

impl<T> Generator<T>
where
    T: MutDistribution<f64>,
{
    pub fn new(iat_distribution: T) -> Self {
        Generator { iat_distribution }
    }
}

impl<T> Arrival for Generator<T>
where
    T: MutDistribution<f64>,
{
    fn next_interarrival(&mut self) -> f64 {
        self.iat_distribution.mut_sample(&mut thread_rng())
    }
}

// Replays absolute arrival timestamps recorded in a file, one per line,
// first field before the delimiter. Timestamps are sorted on load and
// handed out as intervals. The trace is finite while the engine expects an
// infinite sequence, so draining it past the end is a caller bug.
pub struct TraceArrival {
    intervals: VecDeque<f64>,
}

impl TraceArrival {
    pub fn from_csv(csv_filename: &str, csv_delimiter: char) -> Result<TraceArrival> {
        let sched_csv = File::open(csv_filename)?;
        let buf_read = BufReader::new(sched_csv);

        let mut stamps: Vec<NotNan<f64>> = Vec::new();
        for line in buf_read.lines() {
            let l = line?;
            if let Some(s) = l.split(csv_delimiter).next() {
                if let Ok(t) = s.parse::<f64>() {
                    match NotNan::new(t) {
                        Ok(t) => stamps.push(t),
                        Err(_) => panic!("NaN timestamp in arrival trace"),
                    }
                }
            }
        }
        stamps.sort();

        let mut intervals = VecDeque::with_capacity(stamps.len());
        let mut prev = 0.;
        for t in stamps {
            let t = t.into_inner();
            intervals.push_back(t - prev);
            prev = t;
        }
        Ok(TraceArrival { intervals })
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }
}

impl Arrival for TraceArrival {
    fn next_interarrival(&mut self) -> f64 {
        match self.intervals.pop_front() {
            Some(dt) => dt,
            None => panic!("arrival trace exhausted"),
        }
    }
}
