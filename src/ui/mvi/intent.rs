/// Marker trait for intents: navigation keys, scroll thresholds, fetch results.
pub trait Intent: Send + 'static {}
