use derive_more::derive::Deref;

/// Time-domain values recovered by an inverse transform, as `(time, value)` points
/// in increasing time order.
#[derive(Debug, Clone, PartialEq, Default, Deref)]
pub struct ReconstructedSignal {
	points: Vec<(f64, f64)>,
}

impl ReconstructedSignal {
	#[must_use]
	pub fn new(points: Vec<(f64, f64)>) -> Self {
		Self { points }
	}

	#[must_use]
	pub fn points(&self) -> &[(f64, f64)] {
		&self.points
	}

	#[must_use]
	pub fn times(&self) -> Vec<f64> {
		self.points.iter().map(|(t, _)| *t).collect()
	}

	#[must_use]
	pub fn values(&self) -> Vec<f64> {
		self.points.iter().map(|(_, v)| *v).collect()
	}

	#[must_use]
	pub fn value_at(&self, n: usize) -> Option<f64> {
		self.points.get(n).map(|(_, v)| *v)
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<(f64, f64)> {
		self.points
	}
}
