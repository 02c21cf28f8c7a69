pub mod credentials;
pub mod hook;
pub mod payload;
pub mod settings;
pub mod submission;

pub use credentials::Credentials;
pub use hook::HookInput;
pub use payload::{SessionPayload, SignedRequest};
pub use settings::RankSettings;
pub use submission::SubmissionResult;
