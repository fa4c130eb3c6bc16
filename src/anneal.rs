use rand::Rng;

/// Bit-packed binary state of a dense model.
#[derive(Clone)]
pub struct QubitState {
	state: Vec<u8>,
	len: usize,
}

static BITVALUES: [u8; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

const BITS: usize = 8;

impl QubitState {
	#[inline]
	pub fn new_random<T: Rng>(len: usize, r: &mut T) -> Self {
		let size = (len + BITS - 1) / BITS;
		let mut v = vec![0u8; size];
		r.fill_bytes(&mut v);
		Self { state: v, len }
	}

	#[allow(unused)]
	#[inline]
	pub fn new_zeroed(len: usize) -> Self {
		Self {
			state: vec![0u8; (len + BITS - 1) / BITS],
			len,
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn get(&self, loc: usize) -> bool {
		assert!(loc < self.len);
		(self.state[loc / BITS] & BITVALUES[loc % BITS]) > 0
	}

	#[inline]
	pub fn flip(&mut self, loc: usize) {
		assert!(loc < self.len);
		self.state[loc / BITS] ^= BITVALUES[loc % BITS];
	}
}

impl std::fmt::Debug for QubitState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for i in 0..self.len {
			if self.get(i) {
				f.write_str("1")?;
			} else {
				f.write_str("0")?;
			}
		}
		Ok(())
	}
}

/// Single-flip Metropolis annealing over a dense QUBO.
#[derive(Clone)]
pub struct SimpleAnnealer {
	pub sweeps_per_round: usize,
	pub beta_schedule: Vec<f64>,
}

impl SimpleAnnealer {
	pub fn new(sweeps_per_round: usize, beta_schedule: Vec<f64>) -> Self {
		Self {
			sweeps_per_round,
			beta_schedule,
		}
	}

	/// Anneals `state` in place. `neighbors[i]` must list every coupling of
	/// variable `i`, so that flipping `i` only touches its own list.
	pub fn run<T: Rng>(
		&self,
		state: &mut QubitState,
		random: &mut T,
		h: &[f64],
		neighbors: &[Vec<(usize, f64)>],
	) {
		assert_eq!(state.len(), neighbors.len());
		assert_eq!(state.len(), h.len());
		// energy change caused by flipping each variable
		let mut energy_diffs = Vec::with_capacity(state.len());
		for (i, ngs) in neighbors.iter().enumerate() {
			let mut energy_diff = h[i];
			for (j, weight) in ngs.iter() {
				if state.get(*j) {
					energy_diff += weight;
				}
			}
			if state.get(i) {
				energy_diff = -energy_diff;
			}
			energy_diffs.push(energy_diff);
		}
		for beta in self.beta_schedule.iter() {
			// exp(-44.36) is below the resolution of the uniform draw
			let threshold = 44.36142 / beta;
			for _ in 0..self.sweeps_per_round {
				for i in 0..state.len() {
					let ed = energy_diffs[i];
					if ed > threshold {
						continue;
					}
					if ed <= 0.0 || f64::exp(-ed * beta) > random.gen_range(0.0, 1.0) {
						state.flip(i);
						let stat = state.get(i);
						for (j, weight) in neighbors[i].iter() {
							if stat != state.get(*j) {
								energy_diffs[*j] += weight;
							} else {
								energy_diffs[*j] -= weight;
							}
						}
						energy_diffs[i] *= -1.0;
					}
				}
			}
		}
	}
}
