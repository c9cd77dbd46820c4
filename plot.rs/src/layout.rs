//! Screen-space geometry of the plot window. Screen `y` grows downwards.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use math_utils::interval::Interval;

/// Space around the plotting area of a cell, for title, labels and tick values.
pub const MARGIN_LEFT: f32 = 70.;
pub const MARGIN_RIGHT: f32 = 20.;
pub const MARGIN_TOP: f32 = 40.;
pub const MARGIN_BOTTOM: f32 = 50.;

/// Fraction of the data range added around the data so that points don't touch the axes.
const DATA_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub w: f32,
	pub h: f32,
}

impl Rect {
	#[must_use]
	pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
		Self { x, y, w, h }
	}

	#[must_use]
	pub fn right(&self) -> f32 {
		self.x + self.w
	}

	#[must_use]
	pub fn bottom(&self) -> f32 {
		self.y + self.h
	}

	/// The rectangle shrunk by the plotting margins. Never negative in size.
	#[must_use]
	pub fn plot_area(&self) -> Self {
		Self {
			x: self.x + MARGIN_LEFT,
			y: self.y + MARGIN_TOP,
			w: (self.w - MARGIN_LEFT - MARGIN_RIGHT).max(0.),
			h: (self.h - MARGIN_TOP - MARGIN_BOTTOM).max(0.),
		}
	}
}

/// Split a `width × height` canvas into `n` cells, row by row, using the
/// smallest square-ish grid that fits them all.
#[must_use]
pub fn grid(n: usize, width: f32, height: f32) -> Vec<Rect> {
	if n == 0 {
		return vec![];
	}
	let cols = (n as f64).sqrt().ceil() as usize;
	let rows = n.div_ceil(cols);
	let cell_w = width / cols as f32;
	let cell_h = height / rows as f32;

	(0..n)
		.map(|i| {
			Rect::new(
				(i % cols) as f32 * cell_w,
				(i / cols) as f32 * cell_h,
				cell_w,
				cell_h,
			)
		})
		.collect()
}

/// Maps data points into a plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
	x_range: Interval,
	y_range: Interval,
	area: Rect,
}

impl Projection {
	/// `None` if no point has finite coordinates.
	#[must_use]
	pub fn fit(points: &[(f64, f64)], area: Rect) -> Option<Self> {
		let x_range = Interval::from_values(points.iter().map(|(x, _)| *x))?.padded(DATA_PADDING);
		let y_range = Interval::from_values(points.iter().map(|(_, y)| *y))?.padded(DATA_PADDING);
		Some(Self {
			x_range,
			y_range,
			area,
		})
	}

	#[must_use]
	pub const fn x_range(&self) -> Interval {
		self.x_range
	}

	#[must_use]
	pub const fn y_range(&self) -> Interval {
		self.y_range
	}

	#[must_use]
	pub fn project(&self, (x, y): (f64, f64)) -> (f32, f32) {
		(
			self.area.x + (self.x_range.normalize(x) * f64::from(self.area.w)) as f32,
			self.area.bottom() - (self.y_range.normalize(y) * f64::from(self.area.h)) as f32,
		)
	}

	/// `n` tick values along the x axis with their horizontal screen position.
	#[must_use]
	pub fn x_ticks(&self, n: usize) -> Vec<(f64, f32)> {
		self.x_range
			.ticks(n)
			.into_iter()
			.map(|value| (value, self.project((value, self.y_range.start())).0))
			.collect()
	}

	/// `n` tick values along the y axis with their vertical screen position.
	#[must_use]
	pub fn y_ticks(&self, n: usize) -> Vec<(f64, f32)> {
		self.y_range
			.ticks(n)
			.into_iter()
			.map(|value| (value, self.project((self.x_range.start(), value)).1))
			.collect()
	}
}
