// Runs one M/M/c/k scenario end to end and prints the aggregate statistics.
//
// Usage: mmck-simulator [lambda] [k] [c] [mu] [narrivals] [logfile]

extern crate mmck_simulator;

use mmck_simulator::stats::SimStats;
use mmck_simulator::{bounded_line, exp_arrival, exp_pool, run, FileLogger};

use std::env;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

fn main() {
    let args: Vec<String> = env::args().collect();

    let lambda: f64 = if args.len() > 1 { args[1].parse().unwrap() } else { 10. };
    let capacity: usize = if args.len() > 2 { args[2].parse().unwrap() } else { 7 };
    let nservers: usize = if args.len() > 3 { args[3].parse().unwrap() } else { 2 };
    let mu: f64 = if args.len() > 4 { args[4].parse().unwrap() } else { 6. };
    let narrivals: usize = if args.len() > 5 { args[5].parse().unwrap() } else { 100_000 };
    let mut logger = if args.len() > 6 {
        Some(FileLogger::new(1024, &args[6]).expect("Could not open log file"))
    } else {
        None
    };

    let arrival = exp_arrival(lambda).expect("arrival rate must be positive");
    let line = bounded_line(capacity);
    let pool = exp_pool(nservers, mu).expect("bad server pool configuration");

    let (rejected, departed) = run(arrival, line, pool);

    // Drain whichever stream has records; rejections come in bursts under
    // heavy load, so they are polled before blocking on departures.
    let mut stats = SimStats::new(nservers, 100. / lambda);
    let mut seen = 0;
    while seen < narrivals {
        if let Ok(cus) = rejected.try_recv() {
            stats.record_rejection(&cus);
            seen += 1;
            continue;
        }
        match departed.recv_timeout(Duration::from_millis(1)) {
            Ok(cus) => {
                if let Some(ref mut log) = logger {
                    log.log(cus);
                }
                stats.record_departure(&cus);
                seen += 1;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    println!("arrivals:           {}", stats.arrivals());
    println!("rejected:           {}", stats.rejections());
    println!("departed:           {}", stats.departures());
    println!("blocking ratio:     {}", stats.blocking_probability());
    println!("mean waiting time:  {}", stats.mean_waiting_time());
    println!("mean sojourn time:  {}", stats.mean_sojourn_time());
    match stats.median_waiting_time() {
        Some(q) => println!("median waiting:     {}", q),
        None => println!("median waiting:     not converged"),
    }
    match stats.p95_waiting_time() {
        Some(q) => println!("p95 waiting:        {}", q),
        None => println!("p95 waiting:        not converged"),
    }
    println!("recent waiting:     {}", stats.recent_waiting_time());
    println!("utilization:        {}", stats.utilization());
}
