mod preview_store;

pub use preview_store::{PreviewStore, StoredPhoto};
