use helpers::ewma::TimeWindowedEwma;
use helpers::p2::P2;
use queues::customer::Customer;

// Steady-state statistics over the two output streams: feed every record in,
// read the aggregates out. Waiting-time quantiles are estimated streamingly,
// utilization is per-server busy time over the observed horizon.
pub struct SimStats {
    arrivals: usize,
    rejections: usize,
    departures: usize,
    total_wait: f64,
    total_service: f64,
    total_sojourn: f64,
    busy_time: Vec<f64>,
    horizon: f64,
    wait_median: P2,
    wait_p95: P2,
    wait_ewma: TimeWindowedEwma,
}

impl SimStats {
    pub fn new(nservers: usize, ewma_window: f64) -> SimStats {
        SimStats {
            arrivals: 0,
            rejections: 0,
            departures: 0,
            total_wait: 0.,
            total_service: 0.,
            total_sojourn: 0.,
            busy_time: vec![0.; nservers],
            horizon: 0.,
            wait_median: P2::new(0.5),
            wait_p95: P2::new(0.95),
            wait_ewma: TimeWindowedEwma::new(ewma_window),
        }
    }

    pub fn record_rejection(&mut self, cus: &Customer) {
        self.arrivals += 1;
        self.rejections += 1;
        if cus.t0 > self.horizon {
            self.horizon = cus.t0;
        }
    }

    pub fn record_departure(&mut self, cus: &Customer) {
        self.arrivals += 1;
        self.departures += 1;
        self.total_wait += cus.waiting_time();
        self.total_service += cus.service_time();
        self.total_sojourn += cus.sojourn_time();

        if cus.server_id >= self.busy_time.len() {
            self.busy_time.resize(cus.server_id + 1, 0.);
        }
        self.busy_time[cus.server_id] += cus.service_time();
        if cus.t2 > self.horizon {
            self.horizon = cus.t2;
        }

        self.wait_median.new_sample(cus.waiting_time());
        self.wait_p95.new_sample(cus.waiting_time());
        self.wait_ewma.update(cus.t2, cus.waiting_time());
    }

    pub fn arrivals(&self) -> usize {
        self.arrivals
    }

    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn departures(&self) -> usize {
        self.departures
    }

    pub fn blocking_probability(&self) -> f64 {
        if self.arrivals == 0 {
            0.
        } else {
            self.rejections as f64 / self.arrivals as f64
        }
    }

    pub fn mean_waiting_time(&self) -> f64 {
        if self.departures == 0 {
            0.
        } else {
            self.total_wait / self.departures as f64
        }
    }

    pub fn mean_service_time(&self) -> f64 {
        if self.departures == 0 {
            0.
        } else {
            self.total_service / self.departures as f64
        }
    }

    pub fn mean_sojourn_time(&self) -> f64 {
        if self.departures == 0 {
            0.
        } else {
            self.total_sojourn / self.departures as f64
        }
    }

    // Fraction of the observed horizon the servers spent busy, averaged
    // over the pool.
    pub fn utilization(&self) -> f64 {
        if self.horizon <= 0. || self.busy_time.is_empty() {
            return 0.;
        }
        let busy: f64 = self.busy_time.iter().sum();
        busy / (self.horizon * self.busy_time.len() as f64)
    }

    pub fn median_waiting_time(&self) -> Option<f64> {
        self.wait_median.get_quantile()
    }

    pub fn p95_waiting_time(&self) -> Option<f64> {
        self.wait_p95.get_quantile()
    }

    pub fn recent_waiting_time(&self) -> f64 {
        self.wait_ewma.current()
    }
}
