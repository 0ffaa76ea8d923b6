//! Plain-text reports printed by the CLI

use roller_animation::Easing;
use roller_core::{changed_places, offset_at_place, AnimationPhase, DigitSlot, UpdateOutcome};
use roller_widget::RollingNumber;

/// One line per easing preset: name, then the CSS string
pub fn presets_table() -> String {
    let width = Easing::PRESETS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    Easing::PRESETS
        .iter()
        .map(|(name, easing)| format!("{name:<width$}  {easing}\n"))
        .collect()
}

/// Describe an update: outcome, transition settings and per-place offsets
pub fn roll_report(before: &[DigitSlot], widget: &RollingNumber, outcome: UpdateOutcome) -> String {
    let phase = match outcome.phase() {
        AnimationPhase::Animating => "animating",
        AnimationPhase::Idle => "idle",
    };
    let headline = match outcome {
        UpdateOutcome::Rolled { from, to } => format!("roll {from} -> {to} ({phase})"),
        UpdateOutcome::Repadded => format!("padding changed ({phase})"),
        UpdateOutcome::Unchanged => format!("unchanged ({phase})"),
    };

    let duration = widget.transition_duration();
    let duration_line = match duration.as_millis() {
        Some(ms) => format!("duration: {duration} ({ms} ms)"),
        None => format!("duration: {duration}"),
    };
    let easing = widget.transition_easing();
    let easing_line = match easing.preset_name() {
        Some(name) => format!("easing: {easing} ({name})"),
        None => format!("easing: {easing}"),
    };

    let mut lines = vec![
        headline,
        duration_line,
        easing_line,
        format!("place  {:>6}  {:>6}", "from", "to"),
    ];

    let after = widget.slots();
    let changed = changed_places(before, after);
    let width = before.len().max(after.len());
    let cell = |slots: &[DigitSlot], place: usize| {
        offset_at_place(slots, place)
            .map_or_else(|| "-".to_string(), |offset| format!("{offset}%"))
    };
    lines.extend((0..width).rev().map(|place| {
        let marker = if changed.contains(&place) { "  *" } else { "" };
        format!(
            "{place:>5}  {:>6}  {:>6}{marker}",
            cell(before, place),
            cell(after, place)
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
