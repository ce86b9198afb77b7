// Structural invariants checked over recorded outcome sequences.

extern crate mmck_simulator;

use mmck_simulator::{
    bounded_line, exp_arrival, exp_pool, run_with_buffers, Customer, Line, Outcome, Simulation,
};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

fn outcomes(lambda: f64, k: usize, c: usize, mu: f64, narrivals: usize) -> Vec<Outcome> {
    let mut sim = Simulation::new(
        exp_arrival(lambda).unwrap(),
        bounded_line(k),
        exp_pool(c, mu).unwrap(),
    );
    (0..narrivals).map(|_| sim.next()).collect()
}

#[test]
fn departure_times_are_ordered_within_each_record() {
    for outcome in outcomes(10., 7, 2, 6., 20_000) {
        if let Outcome::Departure(cus) = outcome {
            assert!(cus.t0 <= cus.t1, "t0 {} > t1 {}", cus.t0, cus.t1);
            assert!(cus.t1 <= cus.t2, "t1 {} > t2 {}", cus.t1, cus.t2);
            assert!(cus.seat_id < 7);
            assert!(cus.server_id < 2);
        }
    }
}

#[test]
fn arrival_clock_is_monotone_across_both_outcome_kinds() {
    let mut last_t0 = 0.;
    for outcome in outcomes(10., 3, 1, 4., 20_000) {
        let t0 = match outcome {
            Outcome::Rejection(cus) => cus.t0,
            Outcome::Departure(cus) => cus.t0,
        };
        assert!(t0 >= last_t0, "arrival clock went backward: {} < {}", t0, last_t0);
        last_t0 = t0;
    }
}

// Wrapper line that remembers every horizon it reported, so rejections can
// be checked against the exact chl the driver held when it decided.
struct RecordingLine<L> {
    inner: L,
    horizons: Rc<RefCell<Vec<f64>>>,
}

impl<L> Line for RecordingLine<L>
where
    L: Line,
{
    fn admit(&mut self, t0: f64, chs: f64) -> (f64, usize) {
        self.inner.admit(t0, chs)
    }

    fn next_free(&self) -> f64 {
        let chl = self.inner.next_free();
        self.horizons.borrow_mut().push(chl);
        chl
    }
}

#[test]
fn rejections_happen_exactly_when_the_line_is_closed() {
    let horizons = Rc::new(RefCell::new(Vec::new()));
    let line = RecordingLine {
        inner: bounded_line(2),
        horizons: horizons.clone(),
    };
    let mut sim = Simulation::new(exp_arrival(10.).unwrap(), line, exp_pool(1, 1.).unwrap());

    let recorded: Vec<Outcome> = (0..20_000).map(|_| sim.next()).collect();
    let horizons = horizons.borrow();

    // The driver refreshes chl once per departure; rejections in between
    // were all decided against the latest refreshed value.
    let mut chl = 0.;
    let mut next_horizon = 0;
    for outcome in recorded.iter() {
        match *outcome {
            Outcome::Rejection(ref cus) => {
                assert!(cus.t0 < chl, "rejected {} with open line (chl {})", cus.t0, chl);
            }
            Outcome::Departure(ref cus) => {
                assert!(cus.t0 >= chl, "admitted {} with closed line (chl {})", cus.t0, chl);
                chl = horizons[next_horizon];
                next_horizon += 1;
            }
        }
    }
    assert_eq!(next_horizon, horizons.len());
}

#[test]
fn servers_never_go_backward() {
    let mut last_per_server: HashMap<usize, Customer> = HashMap::new();
    for outcome in outcomes(10., 5, 3, 2., 30_000) {
        if let Outcome::Departure(cus) = outcome {
            if let Some(prev) = last_per_server.get(&cus.server_id) {
                assert!(
                    cus.t1 >= prev.t2,
                    "server {} started {} before its previous departure {}",
                    cus.server_id,
                    cus.t1,
                    prev.t2
                );
                assert!(cus.t2 > prev.t2);
            }
            last_per_server.insert(cus.server_id, cus);
        }
    }
    assert_eq!(last_per_server.len(), 3);
}

#[test]
fn system_population_never_exceeds_seats_plus_servers() {
    let k = 4;
    let c = 2;

    // Sweep over +1/-1 events at t0/t2; departures leave before arrivals
    // are counted on ties.
    let mut events: Vec<(f64, i32)> = Vec::new();
    for outcome in outcomes(12., k, c, 2., 30_000) {
        if let Outcome::Departure(cus) = outcome {
            events.push((cus.t0, 1));
            events.push((cus.t2, -1));
        }
    }
    events.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap()
            .then(a.1.cmp(&b.1))
    });

    let mut population = 0;
    let mut peak = 0;
    for (_, delta) in events {
        population += delta;
        if population > peak {
            peak = population;
        }
    }
    assert!(
        peak <= (k + c) as i32,
        "system population peaked at {} with k + c = {}",
        peak,
        k + c
    );
}

#[test]
fn output_streams_are_each_ordered_by_arrival_time() {
    let (rejected, departed) = run_with_buffers(
        exp_arrival(10.).unwrap(),
        bounded_line(3),
        exp_pool(1, 4.).unwrap(),
        8,
        32,
    );

    let mut rejections = Vec::new();
    let mut departures = Vec::new();
    while rejections.len() + departures.len() < 5000 {
        if let Ok(cus) = rejected.try_recv() {
            rejections.push(cus);
            continue;
        }
        match departed.recv_timeout(Duration::from_millis(10)) {
            Ok(cus) => departures.push(cus),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => panic!("producer died"),
        }
    }

    for pair in rejections.windows(2) {
        assert!(pair[0].t0 <= pair[1].t0);
    }
    for pair in departures.windows(2) {
        assert!(pair[0].t0 <= pair[1].t0);
    }
    // Rejected records never carry service fields.
    for cus in &rejections {
        assert_eq!(cus.t1, 0.);
        assert_eq!(cus.t2, 0.);
    }
    // Dropping the receivers shuts the producer down.
    drop(rejected);
    drop(departed);
}
