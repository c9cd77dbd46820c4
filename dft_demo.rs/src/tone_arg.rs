use dft::Tone;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToneParseError {
	#[error("expected FREQ[:AMP[:PHASE]], got \"{0}\"")]
	Format(String),
	#[error("invalid number \"{0}\"")]
	Number(String),
}

/// Parse `FREQ[:AMP[:PHASE]]`. Amplitude defaults to 1, phase to 0.
pub fn parse_tone(s: &str) -> Result<Tone, ToneParseError> {
	let parts: Vec<&str> = s.split(':').map(str::trim).collect();
	if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
		return Err(ToneParseError::Format(s.to_owned()));
	}

	let number = |part: &str| -> Result<f64, ToneParseError> {
		part.parse::<f64>()
			.ok()
			.filter(|v| v.is_finite())
			.ok_or_else(|| ToneParseError::Number(part.to_owned()))
	};

	Ok(Tone::new(
		number(parts[0])?,
		parts.get(1).map_or(Ok(1.), |&p| number(p))?,
		parts.get(2).map_or(Ok(0.), |&p| number(p))?,
	))
}
