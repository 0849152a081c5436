//! Profile Persistence
//!
//! The demo user profile, saved as one JSON record in key-value storage:
//!
//! - **record**: The flat field → value record
//! - **storage**: Storage seam plus memory and file backends
//! - **form**: Form model, load/save controller and save feedback
//! - **error**: Error types

pub mod error;
pub mod form;
pub mod record;
pub mod storage;

pub use error::{ProfileError, ProfileResult};
pub use form::{
    FormField, ProfileForm, ProfileStore, SaveFeedback, DEFAULT_PROFILE_KEY, SAVED_MESSAGE,
    SAVE_FAILED_MESSAGE,
};
pub use record::ProfileRecord;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
