use queues::customer::Customer;
use queues::{Arrival, Line, Service};

use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;

pub const REJECT_BUFFER: usize = 8;
pub const DEPART_BUFFER: usize = 32;

pub enum Outcome {
    Rejection(Customer),
    Departure(Customer),
}

// The orchestrator. Each call to next() processes exactly one arrival,
// compared against chl, the cached line horizon, and dispatched through the
// line and the pool. The stages are called strictly in sequence: the data
// dependency chain (arrival -> admit -> serve -> chs feedback) is a single
// cycle and leaves nothing to run concurrently.
pub struct Simulation<A, L, S>
where
    A: Arrival,
    L: Line,
    S: Service,
{
    arrival: A,
    line: L,
    service: S,
    t0: f64,
    chl: f64, // line back-slot free time
    chs: f64, // server-pool earliest-free time
}

impl<A, L, S> Simulation<A, L, S>
where
    A: Arrival,
    L: Line,
    S: Service,
{
    pub fn new(arrival: A, line: L, service: S) -> Simulation<A, L, S> {
        Simulation {
            arrival,
            line,
            service,
            t0: 0.,
            chl: 0.,
            chs: 0.,
        }
    }

    pub fn next(&mut self) -> Outcome {
        let dt = self.arrival.next_interarrival();
        assert!(dt >= 0., "inter-arrival interval must be non-negative, got {}", dt);
        self.t0 += dt;

        if self.t0 < self.chl {
            return Outcome::Rejection(Customer::rejected(self.t0));
        }
        // accepted

        let (t1, seat_id) = self.line.admit(self.t0, self.chs);
        self.chl = self.line.next_free();
        // waited

        let (t2, server_id) = self.service.serve(t1);
        self.chs = self.service.earliest_free();
        // served

        Outcome::Departure(Customer {
            t0: self.t0,
            t1,
            t2,
            seat_id,
            server_id,
        })
    }
}

pub fn run<A, L, S>(arrival: A, line: L, service: S) -> (Receiver<Customer>, Receiver<Customer>)
where
    A: Arrival + Send + 'static,
    L: Line + Send + 'static,
    S: Service + Send + 'static,
{
    run_with_buffers(arrival, line, service, REJECT_BUFFER, DEPART_BUFFER)
}

// Spawns the producer thread and hands back the two bounded output streams
// (rejected, departed), each ordered by arrival time. A full buffer blocks
// the producer until the consumer catches up; dropping either receiver
// shuts the producer down at its next publish.
pub fn run_with_buffers<A, L, S>(
    arrival: A,
    line: L,
    service: S,
    reject_buffer: usize,
    depart_buffer: usize,
) -> (Receiver<Customer>, Receiver<Customer>)
where
    A: Arrival + Send + 'static,
    L: Line + Send + 'static,
    S: Service + Send + 'static,
{
    let (rej, rejected) = sync_channel(reject_buffer);
    let (dep, departed) = sync_channel(depart_buffer);

    thread::spawn(move || {
        let mut sim = Simulation::new(arrival, line, service);
        loop {
            let sent = match sim.next() {
                Outcome::Rejection(cus) => rej.send(cus),
                Outcome::Departure(cus) => dep.send(cus),
            };
            if sent.is_err() {
                break; // consumer hung up
            }
        }
    });

    (rejected, departed)
}
