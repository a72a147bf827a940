//! The four analyzer passes.
//!
//! Passes are order-independent and each produces at most a handful of
//! canned suggestions. They are fallible by contract so the engine can
//! isolate a misbehaving pass, even though the current analyzers are
//! simple branch checks that do not fail in practice.

use veneer_types::{Category, Priority, Suggestion};

use crate::error::Result;
use crate::snapshot::SettingsSnapshot;

pub type PassFn = fn(&SettingsSnapshot) -> Result<Vec<Suggestion>>;

/// Every pass, in the order their output appears in the report.
pub fn analyzer_passes() -> [(&'static str, PassFn); 4] {
    [
        ("theme", theme_pass),
        ("performance", performance_pass),
        ("accessibility", accessibility_pass),
        ("user-experience", user_experience_pass),
    ]
}

/// Theme pass: the count branches are mutually exclusive, the CSS check is
/// independent and can co-occur with the "expand" branch.
pub fn theme_pass(snapshot: &SettingsSnapshot) -> Result<Vec<Suggestion>> {
    let mut suggestions = Vec::new();

    if snapshot.theme_count == 0 {
        suggestions.push(Suggestion::new(
            Category::Theme,
            Priority::High,
            "Create Custom Themes",
            "No custom themes found. Create branded themes to improve user experience.",
            "Go to Theme Manager and create a custom theme",
            "palette",
        ));
    } else if snapshot.theme_count < 3 {
        suggestions.push(Suggestion::new(
            Category::Theme,
            Priority::Medium,
            "Expand Theme Options",
            "Consider creating additional themes for different user preferences (light, dark, high contrast).",
            "Create additional theme variants in Theme Manager",
            "palette",
        ));
    }

    if snapshot.themes_with_css == 0 && snapshot.theme_count > 0 {
        suggestions.push(Suggestion::new(
            Category::Theme,
            Priority::Low,
            "Add Custom CSS",
            "Enhance your themes with custom CSS for unique branding.",
            "Add custom CSS to your themes in Theme Manager",
            "code",
        ));
    }

    Ok(suggestions)
}

/// Performance pass: two independent flags, both can fire.
pub fn performance_pass(snapshot: &SettingsSnapshot) -> Result<Vec<Suggestion>> {
    let mut suggestions = Vec::new();

    if snapshot.settings.enable_animations {
        suggestions.push(Suggestion::new(
            Category::Performance,
            Priority::Low,
            "Consider Reducing Animations",
            "Animations are enabled. Consider disabling on slower devices for better performance.",
            "Test performance on various devices and adjust animation settings",
            "zap",
        ));
    }

    if snapshot.settings.enable_glassmorphism {
        suggestions.push(Suggestion::new(
            Category::Performance,
            Priority::Medium,
            "Monitor Glassmorphism Performance",
            "Glassmorphism effects can impact performance on older devices.",
            "Monitor performance metrics and consider disabling on slower devices",
            "monitor",
        ));
    }

    Ok(suggestions)
}

/// Accessibility pass: contrast theme and reduced-motion checks are
/// independent.
pub fn accessibility_pass(snapshot: &SettingsSnapshot) -> Result<Vec<Suggestion>> {
    let mut suggestions = Vec::new();

    if !snapshot.settings.modern_theme.is_accessible() {
        suggestions.push(Suggestion::new(
            Category::Accessibility,
            Priority::High,
            "Create High Contrast Theme",
            "Improve accessibility by creating a high contrast theme for users with visual impairments.",
            "Create a high contrast theme in Theme Manager",
            "eye",
        ));
    }

    if snapshot.settings.enable_shadows {
        suggestions.push(Suggestion::new(
            Category::Accessibility,
            Priority::Medium,
            "Consider Reduced Motion Option",
            "Some users prefer reduced visual effects. Consider providing an option to disable shadows.",
            "Add user preference for reduced visual effects",
            "user",
        ));
    }

    Ok(suggestions)
}

/// UX pass: a fixed list, emitted unconditionally.
pub fn user_experience_pass(_snapshot: &SettingsSnapshot) -> Result<Vec<Suggestion>> {
    Ok(vec![
        Suggestion::new(
            Category::UserExperience,
            Priority::Medium,
            "Collect User Feedback",
            "Consider implementing user feedback collection to continuously improve the interface.",
            "Add feedback forms or survey mechanisms",
            "message-circle",
        ),
        Suggestion::new(
            Category::UserExperience,
            Priority::High,
            "Optimize for Mobile",
            "Ensure all interface enhancements work well on mobile devices and tablets.",
            "Test and optimize the interface for various screen sizes",
            "smartphone",
        ),
        Suggestion::new(
            Category::UserExperience,
            Priority::Medium,
            "Create User Onboarding",
            "Help new users discover and configure the desk features effectively.",
            "Create guided tours or help documentation",
            "help-circle",
        ),
    ])
}
