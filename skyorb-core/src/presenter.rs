use crate::{
    client::CurrentWeatherClient,
    error::LookupError,
    model::{WeatherQuery, WeatherRecord},
    view::{map::MapView, panel::TextPanel, scene::ViewportScene},
};

/// Banner messages, verbatim from the UI contract.
pub const MSG_EMPTY_INPUT: &str = "Please enter a city name";
pub const MSG_NOT_FOUND: &str = "City not found";
pub const MSG_FETCH_FAILED: &str = "Error fetching weather data";

const DEFAULT_CITY: &str = "London";
const MARKER_ZOOM: u8 = 13;

/// What is currently shown: a successful result, an error, or neither.
/// The enum shape guarantees record and error are never populated together.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Empty,
    Displaying(WeatherRecord),
    Error(String),
}

/// Identifies one submitted lookup. A completion carrying a superseded
/// ticket is discarded, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Sole owner of [`ViewState`]; mediates every user-triggered transition
/// and fans successful lookups out to the three view models.
#[derive(Debug)]
pub struct WeatherPresenter<C> {
    client: C,
    state: ViewState,
    map: MapView,
    scene: ViewportScene,
    panel: TextPanel,
    lookup_seq: u64,
}

impl<C: CurrentWeatherClient> WeatherPresenter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: ViewState::Empty,
            map: MapView::default(),
            scene: ViewportScene::new(),
            panel: TextPanel::default(),
            lookup_seq: 0,
        }
    }

    /// Startup sequence: default views, then the initial city.
    pub async fn init(&mut self) {
        self.reset_views();
        self.submit_lookup(DEFAULT_CITY).await;
    }

    /// One user-triggered lookup. Empty input never reaches the network.
    pub async fn submit_lookup(&mut self, raw_input: &str) {
        let Some(query) = WeatherQuery::parse(raw_input) else {
            self.set_error(MSG_EMPTY_INPUT.to_owned());
            return;
        };

        let ticket = self.begin_lookup();
        let outcome = self.client.current_weather(&query).await;
        self.complete_lookup(ticket, outcome);
    }

    /// Reserve the next lookup slot. Frontends that run the network call on
    /// their own task pair this with [`Self::complete_lookup`] to get the
    /// same stale-response protection `submit_lookup` has.
    ///
    /// A new attempt dismisses any prior error immediately, even if the
    /// matching completion never applies.
    pub fn begin_lookup(&mut self) -> LookupTicket {
        self.panel.hide_banner();
        if matches!(self.state, ViewState::Error(_)) {
            self.state = ViewState::Empty;
        }
        self.lookup_seq += 1;
        LookupTicket(self.lookup_seq)
    }

    /// Apply a lookup outcome, unless a newer submission has superseded it.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<WeatherRecord, LookupError>,
    ) {
        if ticket.0 != self.lookup_seq {
            tracing::debug!(
                ticket = ticket.0,
                current = self.lookup_seq,
                "dropping stale lookup response"
            );
            return;
        }

        match outcome {
            Ok(record) => self.apply_record(record),
            Err(LookupError::NotFound) => self.set_error(MSG_NOT_FOUND.to_owned()),
            Err(LookupError::Network(reason)) => {
                tracing::warn!(%reason, "weather lookup failed in transport");
                self.set_error(MSG_FETCH_FAILED.to_owned());
            }
            Err(LookupError::MalformedResponse(reason)) => {
                tracing::warn!(%reason, "weather provider sent an unusable body");
                self.set_error(MSG_FETCH_FAILED.to_owned());
            }
        }
    }

    /// Back to the empty state: placeholder panel, default map viewport with
    /// no markers, temperature-0 sphere. Idempotent.
    pub fn clear(&mut self) {
        self.state = ViewState::Empty;
        self.reset_views();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn scene(&self) -> &ViewportScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut ViewportScene {
        &mut self.scene
    }

    pub fn panel(&self) -> &TextPanel {
        &self.panel
    }

    fn reset_views(&mut self) {
        self.panel.reset();
        self.map.reset_to_default();
        self.scene.reset();
    }

    fn apply_record(&mut self, record: WeatherRecord) {
        self.panel.show_record(&record);
        self.map
            .center_and_mark(record.latitude, record.longitude, MARKER_ZOOM);
        self.scene.set_temperature_color(record.temperature_c);
        self.state = ViewState::Displaying(record);
    }

    fn set_error(&mut self, message: String) {
        self.panel.show_banner(&message);
        self.state = ViewState::Error(message);
    }
}
