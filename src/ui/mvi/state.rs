/// Marker trait for view state. Cloneable, comparable, with an initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
