// The complete record of experience of one customer. For rejected customers
// only t0 is meaningful; the remaining fields stay at their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Customer {
    pub t0: f64, // arrival time
    pub t1: f64, // service-start time
    pub t2: f64, // departure time
    pub seat_id: usize,
    pub server_id: usize,
}

impl Customer {
    pub fn rejected(t0: f64) -> Customer {
        Customer {
            t0,
            ..Default::default()
        }
    }

    pub fn waiting_time(&self) -> f64 {
        self.t1 - self.t0
    }

    pub fn service_time(&self) -> f64 {
        self.t2 - self.t1
    }

    pub fn sojourn_time(&self) -> f64 {
        self.t2 - self.t0
    }
}
