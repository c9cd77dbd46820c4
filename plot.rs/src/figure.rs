#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotError {
	#[error("figure has no points to draw")]
	EmptyFigure,
	#[error("the plot window has already been closed")]
	WindowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
	/// Points joined by a line, in the order they were given.
	#[default]
	Line,
	/// One marker per point.
	Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
	/// Return as soon as the figure has been handed to the window.
	#[default]
	NonBlocking,
	/// Return once the window has been closed.
	Blocking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
	title: String,
	x_label: String,
	y_label: String,
	points: Vec<(f64, f64)>,
	style: PlotStyle,
}

impl Figure {
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		x_label: impl Into<String>,
		y_label: impl Into<String>,
		points: Vec<(f64, f64)>,
		style: PlotStyle,
	) -> Self {
		Self {
			title: title.into(),
			x_label: x_label.into(),
			y_label: y_label.into(),
			points,
			style,
		}
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	#[must_use]
	pub fn x_label(&self) -> &str {
		&self.x_label
	}

	#[must_use]
	pub fn y_label(&self) -> &str {
		&self.y_label
	}

	#[must_use]
	pub fn points(&self) -> &[(f64, f64)] {
		&self.points
	}

	#[must_use]
	pub const fn style(&self) -> PlotStyle {
		self.style
	}

	/// # Errors
	/// [`PlotError::EmptyFigure`] if there is nothing to draw.
	pub fn validate(&self) -> Result<(), PlotError> {
		if self.points.is_empty() {
			Err(PlotError::EmptyFigure)
		} else {
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation() {
		let figure = Figure::new("Amplitudes", "Frequency", "Amplitude", vec![], PlotStyle::Scatter);
		assert_eq!(figure.validate(), Err(PlotError::EmptyFigure));

		let figure = Figure::new("Signal", "Time", "Value", vec![(0., 1.)], PlotStyle::Line);
		assert_eq!(figure.validate(), Ok(()));
		assert_eq!(figure.title(), "Signal");
		assert_eq!(figure.x_label(), "Time");
		assert_eq!(figure.y_label(), "Value");
		assert_eq!(figure.style(), PlotStyle::Line);
	}
}
