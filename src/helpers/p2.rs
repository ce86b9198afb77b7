use ordered_float::NotNan;

static NB_MARKERS: usize = 5;
static CONV_MIN: usize = 500;

// Streaming quantile estimation with the P-squared algorithm: five markers
// track the running minimum, maximum, the target quantile and the two
// midpoints. Marker heights are nudged towards their ideal positions with a
// parabolic fit, falling back to linear interpolation when the parabola
// overshoots a neighbor.
#[derive(Debug)]
pub struct P2 {
    count: usize,
    heights: Vec<NotNan<f64>>,
    positions: Vec<usize>,
    npos: Vec<NotNan<f64>>,
    incr: Vec<NotNan<f64>>,
}

impl P2 {
    pub fn new(p: f64) -> Self {
        P2 {
            count: 0,
            heights: Vec::with_capacity(NB_MARKERS),
            positions: (1..(NB_MARKERS + 1)).collect(),
            npos: vec![1., 1. + 2. * p, 1. + 4. * p, 3. + 2. * p, 5.]
                .into_iter()
                .map(|x| NotNan::new(x).unwrap())
                .collect(),
            incr: vec![0., p / 2., p, (1. + p) / 2., 1.]
                .into_iter()
                .map(|x| NotNan::new(x).unwrap())
                .collect(),
        }
    }

    fn parabolic_formula(&self, i: usize, d: f64) -> NotNan<f64> {
        assert!(i >= 1 && i <= 3);

        let qi = self.heights[i];
        let qim1 = self.heights[i - 1];
        let qip1 = self.heights[i + 1];
        let ni = NotNan::new(self.positions[i] as f64).unwrap();
        let nim1 = NotNan::new(self.positions[i - 1] as f64).unwrap();
        let nip1 = NotNan::new(self.positions[i + 1] as f64).unwrap();
        let d = NotNan::new(d).unwrap();

        let mut ret = (nip1 - ni - d) * (qi - qim1) / (ni - nim1);
        ret += (ni - nim1 + d) * (qip1 - qi) / (nip1 - ni);
        ret *= d / (nip1 - nim1);
        ret + qi
    }

    fn linear_formula(&self, i: usize, d: f64) -> NotNan<f64> {
        assert!(i >= 1 && i <= 3);

        let num = if d > 0. {
            self.heights[i + 1] - self.heights[i]
        } else {
            self.heights[i] - self.heights[i - 1]
        };
        let den = if d > 0. {
            self.positions[i + 1] - self.positions[i]
        } else {
            self.positions[i] - self.positions[i - 1]
        };
        let den = NotNan::new(den as f64).unwrap();
        let d = NotNan::new(d).unwrap();

        self.heights[i] + d * num / den
    }

    fn adjust(&mut self) {
        for i in 1..4 {
            let d = self.npos[i] - (self.positions[i] as f64);
            let d = d.into_inner();

            if ((d >= 1.) && ((self.positions[i + 1] - self.positions[i]) > 1))
                || ((d <= -1.) && ((self.positions[i] - self.positions[i - 1]) > 1))
            {
                let d = if d >= 0. { 1. } else { -1. };
                let new_height = self.parabolic_formula(i, d);

                if (self.heights[i - 1] < new_height) && (new_height < self.heights[i + 1]) {
                    self.heights[i] = new_height;
                } else {
                    self.heights[i] = self.linear_formula(i, d);
                }

                self.positions[i] = if d >= 0. {
                    self.positions[i] + 1
                } else {
                    self.positions[i] - 1
                };
            }
        }
    }

    pub fn new_sample(&mut self, sample: f64) {
        self.count += 1;
        let sample = NotNan::new(sample).unwrap();

        // The first five samples bootstrap the markers.
        let hlen = self.heights.len();
        if hlen < NB_MARKERS {
            self.heights.push(sample);
            if (hlen + 1) == NB_MARKERS {
                self.heights.sort();
            }
            return;
        }

        let mut k = 1;
        if sample < self.heights[0] {
            self.heights[0] = sample;
        } else {
            while (sample >= self.heights[k]) && (k <= 3) {
                k += 1;
            }
            if sample > self.heights[4] {
                self.heights[4] = sample;
            }
        }

        for i in k..NB_MARKERS {
            self.positions[i] += 1;
        }
        for i in 0..NB_MARKERS {
            self.npos[i] = self.npos[i] + self.incr[i];
        }

        self.adjust();
    }

    // None until enough samples went in for the markers to settle.
    pub fn get_quantile(&self) -> Option<f64> {
        if self.count > CONV_MIN {
            Some(self.heights[2].into_inner())
        } else {
            None
        }
    }
}
