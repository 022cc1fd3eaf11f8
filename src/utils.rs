use crate::constants::*;
use glam::Vec3;

// --- Helper Functions ---

/// Maps an agent's state to its display color. Inactive agents are flat
/// gray. Active agents ramp base → yellow → red keyed to absolute
/// temperature over 25..95 °C, independent of the current stage.
pub fn cell_color(active: bool, temperature: f32, base_color: Vec3) -> Vec3 {
    if !active {
        return INACTIVE_COLOR;
    }
    let temp_factor = ((temperature - AMBIENT_TEMPERATURE) / TEMP_RAMP_SPAN).clamp(0.0, 1.0);
    if temp_factor < 0.5 {
        base_color.lerp(HOT_YELLOW, temp_factor * 2.0)
    } else {
        HOT_YELLOW.lerp(HOT_RED, (temp_factor - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Vec3 = Vec3::new(0.2, 0.8, 0.2);

    #[test]
    fn inactive_is_gray_at_any_temperature() {
        assert_eq!(cell_color(false, 25.0, GREEN), Vec3::splat(0.5));
        assert_eq!(cell_color(false, 94.0, GREEN), Vec3::splat(0.5));
    }

    #[test]
    fn ambient_temperature_shows_base_color() {
        assert_eq!(cell_color(true, 25.0, GREEN), GREEN);
    }

    #[test]
    fn midpoint_is_hot_yellow() {
        // 60 °C is exactly half the ramp.
        let color = cell_color(true, 60.0, GREEN);
        assert!((color - HOT_YELLOW).length() < 1e-6);
    }

    #[test]
    fn ramp_top_is_red_and_clamped() {
        let at_top = cell_color(true, 95.0, GREEN);
        let beyond = cell_color(true, 140.0, GREEN);
        assert!((at_top - HOT_RED).length() < 1e-6);
        assert_eq!(at_top, beyond);
    }

    #[test]
    fn lower_half_blends_base_toward_yellow() {
        let color = cell_color(true, 42.5, GREEN); // quarter of the ramp
        let expected = GREEN.lerp(HOT_YELLOW, 0.5);
        assert!((color - expected).length() < 1e-6);
    }
}
