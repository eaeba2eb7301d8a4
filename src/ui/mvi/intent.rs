/// Marker trait for intents.
///
/// An intent is either a user gesture (a tap on increment) or the
/// completion of background work (a fetched value arriving). Intents carry
/// data only; the reducer decides what they mean.
pub trait Intent: Send + 'static {}
