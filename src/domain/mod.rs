//! Domain logic - release intent values independent of prompts and processes

pub mod increment;
pub mod intent;
pub mod prerelease;

pub use increment::{Increment, VersionToken};
pub use intent::{validate_tag_name, DistTag, ReleaseIntent};
pub use prerelease::PrereleaseId;
