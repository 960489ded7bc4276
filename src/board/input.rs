//! Debounced directional input
//!
//! A raw axis turns into a discrete pulse only when it is past the deadzone
//! and has moved far enough since the previous tick. Holding a direction
//! therefore fires once.

/// Edge detector over a raw -1..=1 axis
#[derive(Debug, Clone)]
pub struct AxisDebounce {
    prev: f32,
    deadzone: f32,
    delta_threshold: f32,
}

impl AxisDebounce {
    pub fn new(deadzone: f32, delta_threshold: f32) -> Self {
        Self {
            prev: 0.0,
            deadzone,
            delta_threshold,
        }
    }

    /// Feed this tick's axis value, returning -1 or +1 when a pulse registers
    ///
    /// Must be called every tick so `prev` tracks the real previous sample.
    pub fn sample(&mut self, axis: f32) -> Option<i32> {
        let axis = if axis.is_nan() { 0.0 } else { axis.clamp(-1.0, 1.0) };
        let delta = axis - self.prev;
        self.prev = axis;

        if delta.abs() > self.delta_threshold && axis.abs() >= self.deadzone && axis != 0.0 {
            Some(axis.signum() as i32)
        } else {
            None
        }
    }
}
