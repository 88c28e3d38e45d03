//! Reading entry: parsing and validation before anything reaches the engine.

use anyhow::{Context, Result, bail};

use crate::engine::{Parameter, Reading};

/// Upper bound of the pH scale.
pub const PH_MAX: f64 = 14.0;

/// Parse three numbers (pH, turbidity, arsenic), then validate them.
///
/// Values are either comma-separated (`7.0, 0.5, 5.0`) or
/// whitespace-separated (`7.0 0.5 5.0`). With commas every field must hold
/// a value, so `7,,0.5` is rejected rather than read as two numbers.
pub fn parse_reading(line: &str) -> Result<Reading> {
    let line = line.trim();
    let tokens: Vec<&str> = if line.contains(',') {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
            bail!("empty field {} in comma-separated reading", pos + 1);
        }
        fields
    } else {
        line.split_whitespace().collect()
    };

    let [ph, turbidity, arsenic] = tokens.as_slice() else {
        bail!(
            "expected 3 values (pH turbidity arsenic), got {}",
            tokens.len()
        );
    };

    let reading = Reading {
        ph: parse_value(Parameter::Ph, ph)?,
        turbidity: parse_value(Parameter::Turbidity, turbidity)?,
        arsenic: parse_value(Parameter::Arsenic, arsenic)?,
    };
    validate(&reading)?;
    Ok(reading)
}

fn parse_value(parameter: Parameter, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("{} is not a number: {token:?}", parameter.label()))
}

/// pH within [0, 14], turbidity and arsenic non-negative, all finite.
pub fn validate(reading: &Reading) -> Result<()> {
    for (parameter, value) in [
        (Parameter::Ph, reading.ph),
        (Parameter::Turbidity, reading.turbidity),
        (Parameter::Arsenic, reading.arsenic),
    ] {
        if !value.is_finite() {
            bail!("{} must be a finite number, got {value}", parameter.label());
        }
        if value < 0.0 {
            bail!("{} cannot be negative, got {value}", parameter.label());
        }
    }
    if reading.ph > PH_MAX {
        bail!("pH must be between 0 and {PH_MAX}, got {}", reading.ph);
    }
    Ok(())
}
