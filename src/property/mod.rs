//! Assignment interception for fields and property setters.
//!
//! The async half of the framework wraps operations; this half wraps
//! assignments. An [`ObservableField`] notifies a listener on every write,
//! and a [`TransformedProperty`] rewrites the incoming value through its
//! registered [`SetterTransform`]s before committing it. Reads are never
//! intercepted on either path.

pub mod observable;
pub mod transform;

pub use observable::ObservableField;
pub use transform::{add_offset, AddOffset, SetterTransform, TransformedProperty};
