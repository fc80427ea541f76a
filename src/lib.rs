//! Black-body color temperature to RGB conversion and back.
//!
//! Three converters share one channel convention (red, green, blue):
//! a logarithmic curve fit ([`kelvin_to_rgb`]), an integer-only table
//! lookup ([`kelvin_to_rgb_fast`]) and the inverse ([`rgb_to_kelvin`]),
//! which bisects over the curve fit. All of them are pure functions over
//! constant data.
//!
//! The approximations are meant for photo manipulation and display white
//! balance, not for colorimetry.

pub mod color;
pub mod curve;
pub mod inverse;
pub mod quantize;
pub mod table;

pub use color::{ParseRgbError, Rgb, fill_gamma_ramp};
pub use curve::{kelvin_to_rgb, kelvin_to_rgb_helland};
pub use inverse::rgb_to_kelvin;
pub use table::kelvin_to_rgb_fast;

/// Lowest temperature the curve fits and the inverse search work with.
pub const KELVIN_MIN: u16 = 1000;
/// Highest temperature the curve fits and the inverse search work with.
pub const KELVIN_MAX: u16 = 40000;
/// Temperature that maps to (255, 255, 255).
pub const WHITE_POINT_KELVIN: u16 = 6500;

/// Runs `f` under a scoped subscriber and returns how many events it emitted.
#[cfg(test)]
pub(crate) fn count_events<T>(f: impl FnOnce() -> T) -> usize {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct Counter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for Counter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(Counter(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}
