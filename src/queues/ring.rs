use queues::Line;

// Fixed-capacity FIFO waiting line, ring-buffered over a single moving back
// index. Each seat stores the service-start time scheduled for its occupant,
// so "when does the back seat free up?" is one array read. The contents form
// a sliding non-decreasing window of start times; a seat is reused once its
// stored time falls into the past and a new admission writes over it.
//
// FIFO departure order across seats is not enforced here: it follows from
// the server pool always dispatching the earliest-free server to service
// starts handed over in non-decreasing order.
pub struct Ring {
    seats: Vec<f64>,
    back: usize,
    horizon: f64, // zero-capacity case only: last issued service-start
}

impl Ring {
    pub fn new(capacity: usize) -> Ring {
        Ring {
            seats: vec![0.; capacity],
            back: 0,
            horizon: 0.,
        }
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }
}

impl Line for Ring {
    fn admit(&mut self, t0: f64, chs: f64) -> (f64, usize) {
        // A zero-capacity line keeps no seats; it tracks the start time it
        // issued last, which is when its next arrival stops being blocked.
        if self.seats.is_empty() {
            self.horizon = if t0 < chs { chs } else { t0 };
            return (self.horizon, 0);
        }

        let seat = self.back;
        if t0 < chs {
            // Wait in the back seat until a server frees up at chs.
            self.seats[seat] = chs;
            self.back = (self.back + 1) % self.seats.len();
            (chs, seat)
        } else {
            // A server is already free: pass through without holding the
            // seat for any measurable time; the back index stays put.
            self.seats[seat] = t0;
            (t0, seat)
        }
    }

    fn next_free(&self) -> f64 {
        if self.seats.is_empty() {
            self.horizon
        } else {
            self.seats[self.back]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queues::Line;

    #[test]
    fn starts_out_open() {
        let line = Ring::new(3);
        assert_eq!(line.next_free(), 0.);
    }

    #[test]
    fn pass_through_keeps_the_back_index() {
        let mut line = Ring::new(3);

        // Server free at 0, arrivals at 1 and 2 both pass through seat 0.
        assert_eq!(line.admit(1., 0.), (1., 0));
        assert_eq!(line.next_free(), 1.);
        assert_eq!(line.admit(2., 0.5), (2., 0));
        assert_eq!(line.next_free(), 2.);
    }

    #[test]
    fn waiting_advances_and_wraps_the_back_index() {
        let mut line = Ring::new(2);

        assert_eq!(line.admit(1., 5.), (5., 0));
        assert_eq!(line.admit(2., 6.), (6., 1));
        // Back wrapped to seat 0, whose occupant starts service at 5.
        assert_eq!(line.next_free(), 5.);
        assert_eq!(line.admit(5.5, 7.), (7., 0));
        assert_eq!(line.next_free(), 6.);
    }

    #[test]
    fn service_start_is_the_later_of_arrival_and_server_free() {
        let mut line = Ring::new(4);
        let (t1, _) = line.admit(3., 1.);
        assert_eq!(t1, 3.);
        let (t1, _) = line.admit(4., 9.);
        assert_eq!(t1, 9.);
    }

    #[test]
    fn zero_capacity_never_touches_a_seat() {
        let mut line = Ring::new(0);
        assert_eq!(line.capacity(), 0);
        assert_eq!(line.next_free(), 0.);

        let (t1, seat) = line.admit(1., 0.5);
        assert_eq!((t1, seat), (1., 0));
        assert_eq!(line.next_free(), 1.);

        let (t1, seat) = line.admit(1.2, 3.);
        assert_eq!((t1, seat), (3., 0));
        assert_eq!(line.next_free(), 3.);
    }
}
