use std::time::Instant;

/// Sphere fill colors, one per temperature band.
pub const COLOR_COLD: u32 = 0x87CEEB;
pub const COLOR_WARM: u32 = 0xFFD700;
pub const COLOR_HOT: u32 = 0xFF4500;

const ROTATION_STEP_RAD: f64 = 0.01;
const PULSE_AMPLITUDE: f64 = 0.1;
const PULSE_FREQUENCY_PER_MS: f64 = 0.005;

/// One of three fixed temperature ranges mapped to a sphere color.
/// No interpolation between bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Cold,
    Warm,
    Hot,
}

impl Band {
    /// `t < 0` is cold, `0 <= t < 20` is warm, `t >= 20` is hot.
    pub fn from_celsius(temp_c: f64) -> Self {
        if temp_c < 0.0 {
            Band::Cold
        } else if temp_c < 20.0 {
            Band::Warm
        } else {
            Band::Hot
        }
    }

    pub fn color(self) -> u32 {
        match self {
            Band::Cold => COLOR_COLD,
            Band::Warm => COLOR_WARM,
            Band::Hot => COLOR_HOT,
        }
    }
}

/// Pulsation scale at a given point on the free-running clock:
/// `1 + 0.1 * sin(elapsed_ms * 0.005)`.
pub fn pulse_scale(elapsed_ms: f64) -> f64 {
    1.0 + PULSE_AMPLITUDE * (elapsed_ms * PULSE_FREQUENCY_PER_MS).sin()
}

/// Rotating translucent sphere view model.
///
/// Rotation and pulsation run on their own clock, one step per rendered
/// frame; a lookup only ever changes the color band. The camera aspect
/// follows the output surface on resize.
#[derive(Debug)]
pub struct ViewportScene {
    band: Band,
    rotation_y: f64,
    aspect: f64,
    output_size: (u32, u32),
    started: Instant,
}

impl ViewportScene {
    pub fn new() -> Self {
        Self {
            band: Band::from_celsius(0.0),
            rotation_y: 0.0,
            aspect: 1.0,
            output_size: (0, 0),
            started: Instant::now(),
        }
    }

    pub fn set_temperature_color(&mut self, temp_c: f64) {
        self.band = Band::from_celsius(temp_c);
    }

    /// One rendered frame: advance the rotation and return the pulsation
    /// scale for this instant.
    pub fn advance_frame(&mut self) -> f64 {
        self.rotation_y += ROTATION_STEP_RAD;
        pulse_scale(self.started.elapsed().as_secs_f64() * 1000.0)
    }

    /// Recompute the camera aspect and record the new output size.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = f64::from(width) / f64::from(height);
        }
        self.output_size = (width, height);
    }

    /// Back to the temperature-0 color. Rotation and the pulse clock are
    /// free-running and keep going.
    pub fn reset(&mut self) {
        self.band = Band::from_celsius(0.0);
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn color(&self) -> u32 {
        self.band.color()
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn output_size(&self) -> (u32, u32) {
        self.output_size
    }
}

impl Default for ViewportScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_put_zero_in_warm_and_twenty_in_hot() {
        assert_eq!(Band::from_celsius(-0.001), Band::Cold);
        assert_eq!(Band::from_celsius(0.0), Band::Warm);
        assert_eq!(Band::from_celsius(19.999), Band::Warm);
        assert_eq!(Band::from_celsius(20.0), Band::Hot);
        assert_eq!(Band::from_celsius(19999.0), Band::Hot);
    }

    #[test]
    fn band_colors_match_fixed_palette() {
        assert_eq!(Band::Cold.color(), 0x87CEEB);
        assert_eq!(Band::Warm.color(), 0xFFD700);
        assert_eq!(Band::Hot.color(), 0xFF4500);
    }

    #[test]
    fn pulse_scale_follows_the_sine_envelope() {
        assert!((pulse_scale(0.0) - 1.0).abs() < 1e-12);

        // sin peaks at elapsed_ms * 0.005 == pi/2
        let peak_ms = std::f64::consts::FRAC_PI_2 / 0.005;
        assert!((pulse_scale(peak_ms) - 1.1).abs() < 1e-9);

        let trough_ms = 3.0 * std::f64::consts::FRAC_PI_2 / 0.005;
        assert!((pulse_scale(trough_ms) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn each_frame_advances_rotation_by_a_fixed_step() {
        let mut scene = ViewportScene::new();
        scene.advance_frame();
        scene.advance_frame();
        scene.advance_frame();
        assert!((scene.rotation_y() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn resize_recomputes_aspect_and_records_size() {
        let mut scene = ViewportScene::new();
        scene.handle_resize(1920, 1080);
        assert!((scene.aspect() - 1920.0 / 1080.0).abs() < 1e-12);
        assert_eq!(scene.output_size(), (1920, 1080));

        // A zero-height surface keeps the previous aspect.
        scene.handle_resize(800, 0);
        assert!((scene.aspect() - 1920.0 / 1080.0).abs() < 1e-12);
        assert_eq!(scene.output_size(), (800, 0));
    }

    #[test]
    fn reset_recolors_for_zero_degrees_but_keeps_rotation() {
        let mut scene = ViewportScene::new();
        scene.set_temperature_color(25.0);
        scene.advance_frame();

        scene.reset();

        assert_eq!(scene.band(), Band::Warm);
        assert!(scene.rotation_y() > 0.0);
    }
}
