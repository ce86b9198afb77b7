use rand::thread_rng;

use distribution::MutDistribution;
use queues::{ConfigError, Service};

#[derive(Debug)]
struct Server<T>
where
    T: MutDistribution<f64>,
{
    id: usize,
    free_at: f64,
    gen: T,
}

// The pool keeps its servers in a flat array arranged as a min-heap on
// free_at. The only structural operation ever needed is "update the root,
// sift it down", so a flat array beats a general-purpose priority queue
// here: every element also carries the server id and its own duration
// source, and both travel with it through rearrangements.
#[derive(Debug)]
pub struct MinheapService<T>
where
    T: MutDistribution<f64>,
{
    heap: Vec<Server<T>>,
}

impl<T> MinheapService<T>
where
    T: MutDistribution<f64>,
{
    // Ids are assigned by position. Every clock starts at zero, so the
    // array is a valid min-heap from the start.
    pub fn from_sources(sources: Vec<T>) -> Result<MinheapService<T>, ConfigError> {
        if sources.is_empty() {
            return Err(ConfigError::ZeroServers);
        }
        let heap = sources
            .into_iter()
            .enumerate()
            .map(|(id, gen)| Server {
                id,
                free_at: 0.,
                gen,
            })
            .collect();
        Ok(MinheapService { heap })
    }

    pub fn nservers(&self) -> usize {
        self.heap.len()
    }

    // Index of the smaller-clocked of two nodes; the first wins ties, which
    // keeps sift-down deterministic and swap-free on equal clocks.
    fn min(&self, i: usize, j: usize) -> usize {
        if self.heap[j].free_at < self.heap[i].free_at {
            j
        } else {
            i
        }
    }

    // Minimum of node i and its children, preferring i, then the left child.
    fn min_of_tri(&self, i: usize) -> usize {
        let j = 2 * i + 1;
        let k = j + 1;
        let limit = self.heap.len() - 1;

        if j > limit {
            i
        } else if k > limit {
            self.min(i, j)
        } else if self.min(i, j) == i {
            self.min(i, k)
        } else {
            self.min(j, k)
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let mut t = self.min_of_tri(i);
        while t != i {
            self.heap.swap(i, t);
            i = t;
            t = self.min_of_tri(i);
        }
    }
}

impl<T> Service for MinheapService<T>
where
    T: MutDistribution<f64>,
{
    fn serve(&mut self, t1: f64) -> (f64, usize) {
        let d = self.heap[0].gen.mut_sample(&mut thread_rng());
        assert!(d >= 0., "service duration must be non-negative, got {}", d);

        let sid = self.heap[0].id;
        let t2 = t1 + d;
        self.heap[0].free_at = t2;
        self.sift_down(0);
        (t2, sid)
    }

    fn earliest_free(&self) -> f64 {
        self.heap[0].free_at
    }
}
