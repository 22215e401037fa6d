pub mod errors;
pub mod id;
pub mod locale;
pub mod profile;
pub mod transcript;

pub use errors::{ConfigError, PlatformError, ShamError};
pub use id::{new_id, SessionId};
pub use profile::{CardInfo, QuickContact, UserProfile};
pub use transcript::{Author, RenderError, TranscriptRenderer, Turn};

pub type Result<T> = std::result::Result<T, ShamError>;
