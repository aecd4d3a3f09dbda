use time::OffsetDateTime;

/// Current weather conditions at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub time: OffsetDateTime,
    pub air_temperature: Option<f64>,
    /// m/s
    pub wind_speed: Option<f64>,
    /// Degrees
    pub wind_from_direction: Option<f64>,
    /// Percent
    pub relative_humidity: Option<f64>,
    pub symbol_code: Option<String>,
}
