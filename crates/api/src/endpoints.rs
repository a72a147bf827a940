//! The entry points themselves.

use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use veneer_store::{RecordId, RecordStore};
use veneer_suggest::{SettingsSnapshot, filter, generate};
use veneer_types::{Category, CheckStatus, Priority, SuggestionRecord, UpgradeCheck};
use veneer_upgrade::{CheckError, ReleaseSource, VersionResolver, check, upgrade_instructions};

use crate::collaborators::{IdentityTranslator, LogNotifier, Notifier, Translator, UserContext};
use crate::envelope::{
    ActionDone, Envelope, FilteredSuggestions, RecordCreated, Suggestions, SuggestionsCreated,
    UpgradeHelp, UpgradeStatus,
};

pub struct Api {
    pub(crate) store: Arc<dyn RecordStore>,
    pub(crate) source: Arc<dyn ReleaseSource>,
    pub(crate) resolver: VersionResolver,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) user: UserContext,
}

impl Api {
    pub fn new(
        store: Arc<dyn RecordStore>,
        source: Arc<dyn ReleaseSource>,
        resolver: VersionResolver,
    ) -> Self {
        Self {
            store,
            source,
            resolver,
            translator: Arc::new(IdentityTranslator),
            notifier: Arc::new(LogNotifier),
            user: UserContext::default(),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_user(mut self, user: UserContext) -> Self {
        self.user = user;
        self
    }

    fn tr(&self, text: &str) -> String {
        self.translator.tr(text)
    }

    /// Run the upgrade check and describe the result.
    pub async fn upgrade_status(&self) -> Envelope<UpgradeStatus> {
        match check(&self.resolver, self.source.as_ref()).await {
            Ok(outcome) => {
                let message = if outcome.update_available {
                    None
                } else {
                    Some(self.tr("You are running the latest version."))
                };
                Envelope::Success(UpgradeStatus {
                    success: true,
                    update_available: outcome.update_available,
                    current_version: outcome.current_version,
                    latest_version: outcome.latest_version,
                    release_notes: outcome.update_available.then_some(outcome.release_notes),
                    release_url: outcome.update_available.then_some(outcome.release_url),
                    published_at: outcome.update_available.then_some(outcome.published_at),
                    message,
                })
            }
            Err(e) => self.check_failure(e),
        }
    }

    fn check_failure<T>(&self, e: CheckError) -> Envelope<T> {
        match e {
            CheckError::Unreachable => Envelope::failure(self.tr(
                "Unable to check for updates. Please check your internet connection.",
            )),
            e @ CheckError::BadVersion { .. } => {
                error!(tag = "upgrade-checker", error = %e, "upgrade check failed");
                Envelope::failure(format!("{}: {}", self.tr("Failed to check for updates"), e))
            }
        }
    }

    /// Canned upgrade instructions.
    pub fn upgrade_help(&self) -> Envelope<UpgradeHelp> {
        let help = upgrade_instructions();
        Envelope::Success(UpgradeHelp {
            success: true,
            instructions: help
                .instructions
                .iter()
                .map(|step| self.tr(step))
                .collect(),
            backup_warning: self.tr(&help.backup_warning),
            support_url: help.support_url,
        })
    }

    /// Generate suggestions from the current settings snapshot.
    pub async fn suggestions(&self) -> Envelope<Suggestions> {
        let snapshot = SettingsSnapshot::load(self.store.as_ref()).await;
        Envelope::Success(Suggestions {
            success: true,
            report: generate(&snapshot),
        })
    }

    /// Exact-match filtering over the unfiltered suggestion list.
    pub async fn filtered_suggestions(
        &self,
        category: Option<Category>,
        priority: Option<Priority>,
    ) -> Envelope<FilteredSuggestions> {
        let snapshot = SettingsSnapshot::load(self.store.as_ref()).await;
        let report = generate(&snapshot);
        let suggestions = filter(&report.suggestions, category, priority);
        Envelope::Success(FilteredSuggestions {
            success: true,
            total: suggestions.len(),
            suggestions,
        })
    }

    /// Run the check and, when it completes, append a row to the
    /// upgrade-check log. A failed check creates no record.
    pub async fn create_upgrade_check_record(&self) -> Envelope<RecordCreated> {
        let outcome = match check(&self.resolver, self.source.as_ref()).await {
            Ok(outcome) => outcome,
            Err(e) => return self.check_failure(e),
        };

        // Release details are only meaningful when an update exists; an
        // up-to-date row logs blank fields.
        let record = UpgradeCheck {
            current_version: outcome.current_version,
            latest_version: outcome.latest_version,
            update_available: outcome.update_available,
            last_checked: Utc::now(),
            release_notes: if outcome.update_available {
                outcome.release_notes
            } else {
                String::new()
            },
            release_url: if outcome.update_available {
                outcome.release_url
            } else {
                String::new()
            },
            status: CheckStatus::Checked,
        };

        match self.store.insert_upgrade_check(&record).await {
            Ok(name) => Envelope::Success(RecordCreated {
                success: true,
                message: self.tr("Upgrade check record created successfully"),
                name,
            }),
            Err(e) => {
                error!(tag = "upgrade-api", error = %e, "failed to create upgrade check record");
                Envelope::failure(format!(
                    "{}: {}",
                    self.tr("Failed to create upgrade check record"),
                    e
                ))
            }
        }
    }

    /// Persist the current suggestion set as pending records.
    pub async fn create_suggestions_records(&self) -> Envelope<SuggestionsCreated> {
        let snapshot = SettingsSnapshot::load(self.store.as_ref()).await;
        let report = generate(&snapshot);

        let mut created = Vec::with_capacity(report.suggestions.len());
        for suggestion in report.suggestions {
            match self
                .store
                .insert_suggestion(&SuggestionRecord::pending(suggestion))
                .await
            {
                Ok(id) => created.push(id),
                Err(e) => {
                    error!(tag = "upgrade-api", error = %e, "failed to create suggestion record");
                    return Envelope::failure(format!(
                        "{}: {}",
                        self.tr("Failed to create suggestion records"),
                        e
                    ));
                }
            }
        }

        Envelope::Success(SuggestionsCreated {
            success: true,
            message: format!(
                "{} {}",
                created.len(),
                self.tr("suggestion records created")
            ),
            suggestions: created,
        })
    }

    /// Mark a stored suggestion completed as of today.
    pub async fn mark_suggestion_completed(&self, id: &RecordId) -> Envelope<ActionDone> {
        match self
            .store
            .complete_suggestion(id, Utc::now().date_naive())
            .await
        {
            Ok(true) => Envelope::Success(ActionDone {
                success: true,
                message: self.tr("Suggestion marked as completed"),
            }),
            Ok(false) => Envelope::failure(self.tr("Suggestion not found")),
            Err(e) => {
                error!(tag = "suggestions", error = %e, "failed to mark suggestion completed");
                Envelope::failure(format!(
                    "{}: {}",
                    self.tr("Failed to mark suggestion as completed"),
                    e
                ))
            }
        }
    }
}
