use crate::model::WeatherRecord;

pub const PLACEHOLDER_CITY: &str = "Select a city";
pub const PLACEHOLDER_TEMPERATURE: &str = "--°C";
pub const PLACEHOLDER_DESCRIPTION: &str = "--";
pub const PLACEHOLDER_HUMIDITY: &str = "Humidity: --%";
pub const PLACEHOLDER_WIND: &str = "Wind: -- m/s";

/// The five summary lines plus the error banner.
///
/// The banner is hidden when `None`; at most one message is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPanel {
    city: String,
    temperature: String,
    description: String,
    humidity: String,
    wind: String,
    banner: Option<String>,
}

impl Default for TextPanel {
    fn default() -> Self {
        Self {
            city: PLACEHOLDER_CITY.to_owned(),
            temperature: PLACEHOLDER_TEMPERATURE.to_owned(),
            description: PLACEHOLDER_DESCRIPTION.to_owned(),
            humidity: PLACEHOLDER_HUMIDITY.to_owned(),
            wind: PLACEHOLDER_WIND.to_owned(),
            banner: None,
        }
    }
}

impl TextPanel {
    pub fn show_record(&mut self, record: &WeatherRecord) {
        self.city = record.city.clone();
        self.temperature = format!("{}°C", record.rounded_temperature());
        self.description = record.condition.clone();
        self.humidity = format!("Humidity: {}%", record.humidity_pct);
        self.wind = format!("Wind: {} m/s", record.wind_speed_mps);
    }

    pub fn show_banner(&mut self, message: &str) {
        self.banner = Some(message.to_owned());
    }

    pub fn hide_banner(&mut self) {
        self.banner = None;
    }

    /// Placeholders everywhere, banner hidden.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn humidity(&self) -> &str {
        &self.humidity
    }

    pub fn wind(&self) -> &str {
        &self.wind
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn default_panel_shows_placeholders() {
        let panel = TextPanel::default();
        assert_eq!(panel.city(), "Select a city");
        assert_eq!(panel.temperature(), "--°C");
        assert_eq!(panel.description(), "--");
        assert_eq!(panel.humidity(), "Humidity: --%");
        assert_eq!(panel.wind(), "Wind: -- m/s");
        assert_eq!(panel.banner(), None);
    }

    #[test]
    fn show_record_formats_all_five_lines() {
        let record = WeatherRecord {
            city: "Paris".into(),
            latitude: 48.86,
            longitude: 2.35,
            temperature_c: 15.4,
            condition: "clear sky".into(),
            humidity_pct: 60,
            wind_speed_mps: 3.1,
            observed_at: Utc::now(),
        };

        let mut panel = TextPanel::default();
        panel.show_record(&record);

        assert_eq!(panel.city(), "Paris");
        assert_eq!(panel.temperature(), "15°C");
        assert_eq!(panel.description(), "clear sky");
        assert_eq!(panel.humidity(), "Humidity: 60%");
        assert_eq!(panel.wind(), "Wind: 3.1 m/s");
    }

    #[test]
    fn banner_toggles_and_reset_clears_everything() {
        let mut panel = TextPanel::default();
        panel.show_banner("City not found");
        assert_eq!(panel.banner(), Some("City not found"));

        panel.hide_banner();
        assert_eq!(panel.banner(), None);

        panel.show_banner("City not found");
        panel.reset();
        assert_eq!(panel, TextPanel::default());
    }
}
