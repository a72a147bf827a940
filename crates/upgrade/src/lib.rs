//! Upgrade checking for the veneer desk plugin.
//!
//! Resolves the locally installed version, fetches the latest published
//! release descriptor from a remote index, and compares the two under
//! semantic-version ordering. The release fetch sits behind a trait so the
//! API layer can be exercised without a network.

pub mod check;
pub mod error;
pub mod instructions;
pub mod release;
pub mod version;

pub use check::{CheckOutcome, check};
pub use error::{CheckError, Result};
pub use instructions::{UpgradeInstructions, upgrade_instructions};
pub use release::{DEFAULT_RELEASE_ENDPOINT, HttpReleaseSource, ReleaseInfo, ReleaseSource};
pub use version::{DEFAULT_VERSION, VersionResolver};
