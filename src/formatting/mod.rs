use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Resolve `Auto` from NO_COLOR / CLICOLOR / CLICOLOR_FORCE.
    pub fn from_env() -> Self {
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            return Self::Always;
        }
        if env::var("NO_COLOR").is_ok() || env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return Self::Never;
        }
        Self::Auto
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Set the global `colored` override for the rest of the process.
    pub fn apply(&self) {
        colored::control::set_override(self.should_use_color());
    }
}

/// Group the integer part of `value` in thousands: `39600.0` → `39,600`.
/// Fractional amounts keep two decimals.
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let rendered = if abs.fract() == 0.0 {
        format!("{:.0}", abs)
    } else {
        format!("{:.2}", abs)
    };
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), Some(frac.to_string())),
        None => (rendered, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let grouped: String = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Prefix a grouped amount with the display currency symbol.
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    if value < 0.0 {
        format!("-{}{}", currency_symbol, format_number(-value))
    } else {
        format!("{}{}", currency_symbol, format_number(value))
    }
}
