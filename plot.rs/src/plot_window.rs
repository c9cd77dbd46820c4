use std::{
	f32::consts::FRAC_PI_2,
	sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError},
	thread::{spawn, JoinHandle},
};

use macroquad::prelude::*;

use crate::{
	layout::{grid, Projection, Rect},
	DisplayMode, Figure, PlotError, PlotStyle,
};

const WINDOW_WIDTH: i32 = 1000;
const WINDOW_HEIGHT: i32 = 800;
const TITLE_FONT_SIZE: f32 = 24.;
const LABEL_FONT_SIZE: f32 = 18.;
const TICK_FONT_SIZE: f32 = 14.;
const N_OF_TICKS: usize = 5;
const MARKER_RADIUS: f32 = 3.;

#[derive(Debug, Default)]
struct Canvas {
	figures: Vec<Figure>,
	closed: bool,
}

fn lock(canvas: &Mutex<Canvas>) -> MutexGuard<'_, Canvas> {
	canvas.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A window, owned by a background thread, that renders every figure it has been given.
pub struct PlotWindow {
	canvas: Arc<Mutex<Canvas>>,
	window: Option<JoinHandle<()>>,
}

impl PlotWindow {
	#[must_use]
	pub fn new() -> Self {
		let canvas = Arc::new(Mutex::new(Canvas::default()));

		Self {
			canvas: canvas.clone(),
			window: Some(spawn(move || {
				let conf = Conf {
					window_title: "plot".to_owned(),
					window_width: WINDOW_WIDTH,
					window_height: WINDOW_HEIGHT,
					..Default::default()
				};
				macroquad::Window::from_config(conf, render(canvas.clone()));
				lock(&canvas).closed = true;
				tracing::debug!("plot window closed");
			})),
		}
	}

	/// Add `figure` to the window.
	///
	/// With [`DisplayMode::Blocking`] this only returns after the window has been closed,
	/// either by the user or by pressing Escape.
	///
	/// # Errors
	/// - [`PlotError::EmptyFigure`] if the figure has no points
	/// - [`PlotError::WindowClosed`] if the window is no longer open
	pub fn show(&mut self, figure: Figure, mode: DisplayMode) -> Result<(), PlotError> {
		figure.validate()?;
		{
			let mut canvas = lock(&self.canvas);
			if canvas.closed || self.window.is_none() {
				return Err(PlotError::WindowClosed);
			}
			tracing::debug!(title = figure.title(), n_of_points = figure.points().len(), "showing figure");
			canvas.figures.push(figure);
		}

		if mode == DisplayMode::Blocking {
			self.wait();
		}
		Ok(())
	}

	/// Block until the window is closed.
	pub fn wait(&mut self) {
		if let Some(window) = self.window.take() {
			if window.join().is_err() {
				tracing::warn!("plot window thread panicked");
			}
			lock(&self.canvas).closed = true;
		}
	}
}

impl Default for PlotWindow {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for PlotWindow {
	fn drop(&mut self) {
		self.wait();
	}
}

pub static PLOT_WINDOW: LazyLock<Mutex<PlotWindow>> =
	LazyLock::new(|| Mutex::new(PlotWindow::new()));

/// Show `figure` in the process-wide [`PLOT_WINDOW`], opening it on first use.
///
/// # Errors
/// See [`PlotWindow::show`].
pub fn show(figure: Figure, mode: DisplayMode) -> Result<(), PlotError> {
	PLOT_WINDOW
		.lock()
		.unwrap_or_else(PoisonError::into_inner)
		.show(figure, mode)
}

async fn render(canvas: Arc<Mutex<Canvas>>) {
	loop {
		if is_key_pressed(KeyCode::Escape) {
			break;
		}
		clear_background(WHITE);
		{
			let canvas = lock(&canvas);
			let cells = grid(canvas.figures.len(), screen_width(), screen_height());
			for (figure, cell) in canvas.figures.iter().zip(cells) {
				draw_figure(figure, cell);
			}
		}
		next_frame().await;
	}
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_figure(figure: &Figure, cell: Rect) {
	let area = cell.plot_area();
	let Some(projection) = Projection::fit(figure.points(), area) else {
		return;
	};

	let title = measure_text(figure.title(), None, TITLE_FONT_SIZE as u16, 1.);
	draw_text(
		figure.title(),
		cell.x + (cell.w - title.width) / 2.,
		cell.y + TITLE_FONT_SIZE,
		TITLE_FONT_SIZE,
		BLACK,
	);

	draw_line(area.x, area.bottom(), area.right(), area.bottom(), 1., BLACK);
	draw_line(area.x, area.y, area.x, area.bottom(), 1., BLACK);

	for (value, x) in projection.x_ticks(N_OF_TICKS) {
		draw_line(x, area.bottom(), x, area.bottom() + 4., 1., BLACK);
		draw_text(
			&format!("{value:.2}"),
			x - 12.,
			area.bottom() + 4. + TICK_FONT_SIZE,
			TICK_FONT_SIZE,
			DARKGRAY,
		);
	}
	for (value, y) in projection.y_ticks(N_OF_TICKS) {
		draw_line(area.x - 4., y, area.x, y, 1., BLACK);
		draw_text(&format!("{value:.2}"), cell.x + 22., y + 4., TICK_FONT_SIZE, DARKGRAY);
	}

	let x_label = measure_text(figure.x_label(), None, LABEL_FONT_SIZE as u16, 1.);
	draw_text(
		figure.x_label(),
		area.x + (area.w - x_label.width) / 2.,
		cell.bottom() - 6.,
		LABEL_FONT_SIZE,
		BLACK,
	);
	let y_label = measure_text(figure.y_label(), None, LABEL_FONT_SIZE as u16, 1.);
	draw_text_ex(
		figure.y_label(),
		cell.x + LABEL_FONT_SIZE,
		area.y + (area.h + y_label.width) / 2.,
		TextParams {
			font_size: LABEL_FONT_SIZE as u16,
			rotation: -FRAC_PI_2,
			color: BLACK,
			..Default::default()
		},
	);

	let points: Vec<(f32, f32)> = figure
		.points()
		.iter()
		.filter(|(x, y)| x.is_finite() && y.is_finite())
		.map(|&p| projection.project(p))
		.collect();
	match figure.style() {
		PlotStyle::Line => {
			for w in points.windows(2) {
				draw_line(w[0].0, w[0].1, w[1].0, w[1].1, 1.5, BLACK);
			}
		}
		PlotStyle::Scatter => {
			for (x, y) in points {
				draw_circle(x, y, MARKER_RADIUS, BLACK);
			}
		}
	}
}
