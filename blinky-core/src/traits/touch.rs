//! Touch sensor input

/// Touch sensor
///
/// A single level read per call, no debouncing. Implementations handle
/// the sensor's polarity.
pub trait TouchInput {
    /// Whether the sensor currently reports a touch
    fn is_touched(&self) -> bool;
}
