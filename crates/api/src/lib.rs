//! Whitelisted entry points of the veneer desk plugin.
//!
//! Every operation returns a JSON-serializable envelope: `{success: true,
//! ...payload}` or `{success: false, message}`. The calling layer renders
//! the envelope directly to end users, so no error is allowed to escape as
//! a fault. Host collaborators (record store, release source, translator,
//! notifier) are injected explicitly.

pub mod collaborators;
pub mod endpoints;
pub mod envelope;
pub mod schedule;

pub use collaborators::{
    IdentityTranslator, LogNotifier, Notification, Notifier, NotifyError, Translator, UserContext,
};
pub use endpoints::Api;
pub use envelope::{Envelope, Failure};
pub use schedule::{Cadence, run_scheduled_check};
