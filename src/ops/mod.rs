pub mod event;
pub mod list_ops;
pub mod sink;
pub mod store;

pub use event::{Dispatch, InputEvent, dispatch};
pub use sink::{JsonSink, PresentationSink, Snapshot, TextSink};
pub use store::Store;
