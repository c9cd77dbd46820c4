//! Sample a sum of cosines, show its amplitude and phase spectra, then
//! rebuild the signal from the spectrum.
//!
//! ```bash
//! dft_demo --sample-rate 150 --window 3 --tone 5:1.5:0.5 --tone 10:2:1
//! dft_demo --no-plot -vv
//! ```

use clap::{ArgAction, Parser};
use dft::{superpose, Dft, InverseDft, SamplingCtx, Spectrum, Tone};
use plot::{DisplayMode, Figure, PlotStyle};

mod tone_arg;
use tone_arg::parse_tone;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Samples per time unit
	#[arg(long, default_value_t = 150.)]
	sample_rate: f64,

	/// Observation window length, in time units
	#[arg(long, default_value_t = 3.)]
	window: f64,

	/// Signal component as FREQ[:AMP[:PHASE]], repeatable
	#[arg(long = "tone", value_parser = parse_tone, default_values = ["5:1.5:0.5", "10:2:1"])]
	tones: Vec<Tone>,

	/// Print the spectrum and the reconstructed signal instead of plotting them
	#[arg(long, default_value_t = false)]
	no_plot: bool,

	/// Verbosity level (-v=info, -vv=debug, -vvv=trace)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let log_level = match args.verbose {
		0 => tracing::Level::WARN,
		1 => tracing::Level::INFO,
		2 => tracing::Level::DEBUG,
		_ => tracing::Level::TRACE,
	};
	let _ = tracing_subscriber::fmt()
		.with_max_level(log_level)
		.with_writer(std::io::stderr)
		.try_init();

	let ctx = SamplingCtx::new(args.window, args.sample_rate)?;
	tracing::info!(
		n_of_samples = ctx.n_of_samples(),
		frequency_gap = ctx.frequency_gap(),
		tones = args.tones.len(),
		"sampling"
	);
	let signal = ctx.sample(superpose(&args.tones));

	let spectrum = Dft::new(ctx).analyze_signal(&signal)?;
	for (frequency, amplitude) in spectrum.dominant_frequencies(1e-6) {
		tracing::info!(frequency, amplitude, "dominant frequency");
	}

	let reconstructed = InverseDft::from_ctx(&ctx).reconstruct(&spectrum)?;
	let max_error = signal
		.iter()
		.zip(reconstructed.values())
		.map(|(expected, actual)| (expected - actual).abs())
		.fold(0., f64::max);
	tracing::info!(max_error, "round trip");

	if args.no_plot {
		print_spectrum(&spectrum);
		println!();
		println!("{:>12} {:>16}", "time", "value");
		for (time, value) in reconstructed.points() {
			println!("{time:>12.6} {value:>16.10}");
		}
		return Ok(());
	}

	plot::show(
		Figure::new(
			"Amplitudes",
			"Frequency",
			"Amplitude",
			spectrum.amplitudes(),
			PlotStyle::Scatter,
		),
		DisplayMode::NonBlocking,
	)?;
	plot::show(
		Figure::new(
			"Phases",
			"Frequency",
			"Phase",
			spectrum.phases(),
			PlotStyle::Scatter,
		),
		DisplayMode::NonBlocking,
	)?;
	plot::show(
		Figure::new(
			"Source signal",
			"Time",
			"Value",
			reconstructed.into_inner(),
			PlotStyle::Line,
		),
		DisplayMode::Blocking,
	)?;

	Ok(())
}

fn print_spectrum(spectrum: &Spectrum) {
	println!("{:>12} {:>16} {:>16}", "frequency", "amplitude", "phase");
	for amplitude in spectrum.non_negative() {
		println!(
			"{:>12.4} {:>16.10} {:>16.10}",
			amplitude.frequency(),
			amplitude.amplitude(),
			amplitude.phase()
		);
	}
}
