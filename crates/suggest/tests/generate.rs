//! Behavior tests for the suggestion engine.

use veneer_store::{MemoryStore, RecordStore};
use veneer_suggest::{SettingsSnapshot, SuggestError, filter, generate, run_passes};
use veneer_suggest::passes::theme_pass;
use veneer_types::{Category, Priority, Suggestion, Theme, ThemeMode, UiSettings};

fn default_snapshot() -> SettingsSnapshot {
    SettingsSnapshot::default()
}

#[test]
fn default_setup_yields_eight_suggestions() {
    // All cosmetic flags on, default theme, no custom themes.
    let report = generate(&default_snapshot());
    assert_eq!(report.total_suggestions, 8);

    let titles: Vec<&str> = report
        .suggestions
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert!(titles.contains(&"Create Custom Themes"));
    assert!(titles.contains(&"Consider Reducing Animations"));
    assert!(titles.contains(&"Monitor Glassmorphism Performance"));
    assert!(titles.contains(&"Create High Contrast Theme"));
    assert!(titles.contains(&"Consider Reduced Motion Option"));
    assert!(titles.contains(&"Collect User Feedback"));
    assert!(titles.contains(&"Optimize for Mobile"));
    assert!(titles.contains(&"Create User Onboarding"));

    let theme_bucket = &report.categories[&Category::Theme];
    assert_eq!(theme_bucket.high.len(), 1);
    assert_eq!(theme_bucket.high[0].title, "Create Custom Themes");
}

#[test]
fn failing_pass_is_skipped_not_fatal() {
    fn broken_pass(_: &SettingsSnapshot) -> veneer_suggest::Result<Vec<Suggestion>> {
        Err(SuggestError::PassFailed(
            "settings backend offline".to_string(),
        ))
    }

    let snapshot = default_snapshot();
    let survivors = run_passes(&[("broken", broken_pass), ("theme", theme_pass)], &snapshot);
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].title, "Create Custom Themes");
}

#[test]
fn generation_is_deterministic() {
    let snapshot = default_snapshot();
    let first = generate(&snapshot);
    let second = generate(&snapshot);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.total_suggestions, second.total_suggestions);
}

#[test]
fn expand_and_css_branches_can_co_occur() {
    let snapshot = SettingsSnapshot::new(UiSettings::default(), 2, 0);
    let report = generate(&snapshot);

    let theme_titles: Vec<&str> = report
        .suggestions
        .iter()
        .filter(|s| s.category == Category::Theme)
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(theme_titles, vec!["Expand Theme Options", "Add Custom CSS"]);
}

#[test]
fn css_branch_needs_at_least_one_theme() {
    let report = generate(&SettingsSnapshot::new(UiSettings::default(), 0, 0));
    assert!(
        report
            .suggestions
            .iter()
            .all(|s| s.title != "Add Custom CSS")
    );
}

#[test]
fn three_or_more_themes_quiet_the_count_branches() {
    let snapshot = SettingsSnapshot::new(UiSettings::default(), 3, 1);
    let report = generate(&snapshot);
    assert!(
        !report
            .suggestions
            .iter()
            .any(|s| s.category == Category::Theme)
    );
}

#[test]
fn accessible_theme_drops_the_contrast_suggestion() {
    let mut settings = UiSettings::default();
    settings.modern_theme = ThemeMode::HighContrast;
    settings.enable_shadows = false;
    let report = generate(&SettingsSnapshot::new(settings, 3, 1));
    assert!(
        !report
            .suggestions
            .iter()
            .any(|s| s.category == Category::Accessibility)
    );
}

#[test]
fn quiet_settings_leave_only_the_fixed_ux_pass() {
    let settings = UiSettings {
        enable_animations: false,
        modern_theme: ThemeMode::Accessible,
        enable_glassmorphism: false,
        enable_shadows: false,
    };
    let report = generate(&SettingsSnapshot::new(settings, 3, 1));
    assert_eq!(report.total_suggestions, 3);
    assert!(
        report
            .suggestions
            .iter()
            .all(|s| s.category == Category::UserExperience)
    );
}

#[test]
fn filter_partitions_the_list() {
    let report = generate(&default_snapshot());
    let total = report.suggestions.len();

    let perf = filter(&report.suggestions, Some(Category::Performance), None);
    assert!(perf.iter().all(|s| s.category == Category::Performance));

    let rest = filter_complement(&report, Category::Performance);
    assert_eq!(perf.len() + rest, total);
}

fn filter_complement(report: &veneer_suggest::SuggestionReport, category: Category) -> usize {
    report
        .suggestions
        .iter()
        .filter(|s| s.category != category)
        .count()
}

#[test]
fn filter_by_both_criteria() {
    let report = generate(&default_snapshot());
    let high_ux = filter(
        &report.suggestions,
        Some(Category::UserExperience),
        Some(Priority::High),
    );
    assert_eq!(high_ux.len(), 1);
    assert_eq!(high_ux[0].title, "Optimize for Mobile");
}

#[test]
fn filter_with_no_matches_is_empty_not_an_error() {
    let report = generate(&default_snapshot());
    let general = filter(&report.suggestions, Some(Category::General), None);
    assert!(general.is_empty());
}

#[tokio::test]
async fn snapshot_loads_counts_from_the_store() {
    let store = MemoryStore::new();
    let styled = Theme::new("Modern Dark", None, None)
        .unwrap()
        .with_css(".desk { background: #1e293b }");
    store.insert_theme(&styled).await.unwrap();
    let plain = Theme::new("Modern Light", None, None).unwrap();
    store.insert_theme(&plain).await.unwrap();

    let snapshot = SettingsSnapshot::load(&store).await;
    assert_eq!(snapshot.theme_count, 2);
    assert_eq!(snapshot.themes_with_css, 1);
    // No settings record saved: defaults apply.
    assert_eq!(snapshot.settings, UiSettings::default());
}
