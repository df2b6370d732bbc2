/// Default viewport: central London, the map's startup state.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 51.505,
    lon: -0.09,
};
pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Map viewport view model: a center, a zoom level and the markers dropped
/// so far. Markers accumulate across lookups; only a full reset removes
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: GeoPoint,
    zoom: u8,
    markers: Vec<GeoPoint>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
        }
    }
}

impl MapView {
    /// Recenter and drop a marker, keeping any prior markers in place.
    pub fn center_and_mark(&mut self, lat: f64, lon: f64, zoom: u8) {
        let point = GeoPoint { lat, lon };
        self.center = point;
        self.zoom = zoom;
        self.markers.push(point);
    }

    /// Back to the default viewport with every marker removed.
    pub fn reset_to_default(&mut self) {
        self.center = DEFAULT_CENTER;
        self.zoom = DEFAULT_ZOOM;
        self.markers.clear();
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[GeoPoint] {
        &self.markers
    }
}
