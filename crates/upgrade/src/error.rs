use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The release index could not be reached or answered with a non-200
    /// status. Details are logged at the fetch site; the caller only needs
    /// to know the check could not complete.
    #[error("release index unreachable")]
    Unreachable,

    /// A version string did not parse as a semantic version. Non-conforming
    /// tags such as "latest" land here rather than being guessed at.
    #[error("version '{version}' is not a semantic version: {source}")]
    BadVersion {
        version: String,
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
