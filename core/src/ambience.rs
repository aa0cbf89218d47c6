//! Maps paint density onto the live effect parameters of the ambient
//! layer. Pure; recomputed every rendered frame.

pub const FILTER_CUTOFF_FLOOR_HZ: f32 = 400.0;
pub const FILTER_CUTOFF_RANGE_HZ: f32 = 2000.0;
pub const DELAY_FEEDBACK_FLOOR: f32 = 0.3;
pub const DELAY_FEEDBACK_RANGE: f32 = 0.4;
pub const REVERB_WET_FLOOR: f32 = 0.2;
pub const REVERB_WET_RANGE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbienceParams {
    pub filter_cutoff_hz: f32,
    pub delay_feedback: f32,
    pub reverb_wet: f32,
}

/// Fraction of the canvas area painted, approximated by the count of
/// qualifying paint events. Deliberately unclamped: repeated painting of
/// the same pixel keeps incrementing the count, so sustained painting can
/// push the derived parameters past their nominal ranges.
pub fn paint_density(paint_count: u64, canvas_area: u64) -> f32 {
    paint_count as f32 / canvas_area as f32
}

pub fn ambience_params(paint_count: u64, canvas_area: u64) -> AmbienceParams {
    let density = paint_density(paint_count, canvas_area);
    AmbienceParams {
        filter_cutoff_hz: FILTER_CUTOFF_FLOOR_HZ
            + density * FILTER_CUTOFF_RANGE_HZ,
        delay_feedback: DELAY_FEEDBACK_FLOOR + density * DELAY_FEEDBACK_RANGE,
        reverb_wet: REVERB_WET_FLOOR + density * REVERB_WET_RANGE,
    }
}
