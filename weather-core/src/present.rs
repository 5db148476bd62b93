//! Turns a [`WeatherReport`] into display strings.

use tracing::warn;

use crate::model::{PresentationResult, WeatherReport};

/// Weather phenomena the provider's condition codes are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Thunderstorm,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    Sleet,
    Atmosphere,
    Tornado,
    Clear,
    PartlyCloudy,
    Overcast,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Thunderstorm => "⛈️",
            Glyph::Drizzle => "🌦️",
            Glyph::Rain => "🌧️",
            Glyph::FreezingRain => "❄️🌧️",
            Glyph::Snow => "🌨️",
            Glyph::Sleet => "🌨️🌧️",
            Glyph::Atmosphere => "🌁",
            Glyph::Tornado => "🌪️",
            Glyph::Clear => "☀️",
            Glyph::PartlyCloudy => "⛅",
            Glyph::Overcast => "☁️",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an OpenWeather condition code. `None` for codes outside every band.
pub fn code_to_glyph(id: i64) -> Option<Glyph> {
    let glyph = match id {
        200..=232 => Glyph::Thunderstorm,
        300..=321 => Glyph::Drizzle,
        500..=531 if id != 511 => Glyph::Rain,
        511 => Glyph::FreezingRain,
        600..=611 => Glyph::Snow,
        612..=622 => Glyph::Sleet,
        701..=771 => Glyph::Atmosphere,
        781 => Glyph::Tornado,
        800 => Glyph::Clear,
        801 | 802 => Glyph::PartlyCloudy,
        803 | 804 => Glyph::Overcast,
        _ => return None,
    };
    Some(glyph)
}

/// Kelvin to whole degrees Fahrenheit, converted in one step.
///
/// Halves round to even.
pub fn fahrenheit(kelvin: f64) -> i64 {
    (kelvin * 9.0 / 5.0 - 459.67).round_ties_even() as i64
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn present(report: &WeatherReport) -> PresentationResult {
    let glyph = match code_to_glyph(report.condition_code) {
        Some(glyph) => glyph.as_str().to_string(),
        None => {
            warn!(code = report.condition_code, "no glyph mapped for weather condition code");
            String::new()
        }
    };

    PresentationResult {
        temperature_display: format!("{}°F", fahrenheit(report.temperature_raw)),
        description_display: capitalize_first(&report.description),
        glyph,
    }
}
