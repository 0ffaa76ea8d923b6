//! Rendering scenarios for the RollingNumber component

use roller_widget::prelude::*;
use roller_widget::rolling_number::OFFSET_PROPERTY;

fn digit_styles(root: &Element) -> Vec<String> {
    root.find_all(classes::DIGIT)
        .iter()
        .filter_map(|digit| digit.attribute("style"))
        .map(str::to_string)
        .collect()
}

fn count_with_offset(root: &Element, offset: &str) -> usize {
    let needle = format!("{OFFSET_PROPERTY}: {offset}");
    digit_styles(root)
        .iter()
        .filter(|style| style.contains(&needle))
        .count()
}

fn first_digit_style(widget: &RollingNumber) -> Option<String> {
    widget
        .render()
        .find(classes::DIGIT)
        .and_then(|digit| digit.attribute("style"))
        .map(str::to_string)
}

#[test]
fn test_renders_positive_number() {
    let root = rolling_number(123).render();
    assert!(root.find(classes::ROOT).is_some());
    assert_eq!(root.find_all(classes::DIGIT).len(), 3);
}

#[test]
fn test_renders_negative_number() {
    let root = rolling_number(-456).render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 4);

    let first_value = root
        .find(classes::DIGIT)
        .and_then(|digit| digit.find(classes::VALUE))
        .unwrap();
    assert!(first_value.text_content().contains('-'));
}

#[test]
fn test_renders_zero() {
    let root = rolling_number(0).render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 1);
    assert_eq!(count_with_offset(&root, "0%"), 1);
}

#[test]
fn test_respects_minimum_digits() {
    let root = rolling_number(5).minimum_digits(4).render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 4);
    assert_eq!(count_with_offset(&root, "10%"), 3);
}

#[test]
fn test_updates_when_value_changes() {
    let mut widget = rolling_number(100);
    let outcome = widget.set_parameters(RollingNumberProps::new(999));
    assert!(outcome.is_roll());

    let root = widget.render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 3);
    assert_eq!(count_with_offset(&root, "-90%"), 3);
}

#[test]
fn test_handles_max_int() {
    let root = rolling_number(i32::MAX).render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 10);
}

#[test]
fn test_handles_min_int() {
    let root = rolling_number(i32::MIN).render();
    assert_eq!(root.find_all(classes::DIGIT).len(), 11);

    let values: String = root
        .find_all(classes::VALUE)
        .iter()
        .map(|value| value.text_content())
        .collect();
    assert_eq!(values, "-2147483648");
}

#[test]
fn test_every_digit_has_scale_and_value() {
    let root = rolling_number(42).render();
    for digit in root.find_all(classes::DIGIT) {
        assert!(digit.find(classes::SCALE).is_some());
        assert!(digit.find(classes::VALUE).is_some());
    }
}

#[test]
fn test_scale_contains_all_digits_and_minus() {
    let root = rolling_number(1).render();
    let scale = root.find(classes::SCALE).unwrap();
    let rows = scale.child_elements();

    assert_eq!(rows.len(), 11);
    assert!(rows.iter().all(|row| row.tag() == "span"));
    assert_eq!(rows.last().map(Element::text_content), Some("-".to_string()));

    let strip: String = rows.iter().map(Element::text_content).collect();
    assert_eq!(strip, "0123456789-");
}

#[test]
fn test_digit_counts() {
    for (value, expected) in [(1, 1), (10, 2), (99, 2), (100, 3), (1234, 4)] {
        let root = rolling_number(value).render();
        assert_eq!(root.find_all(classes::DIGIT).len(), expected, "value {value}");
    }
}

#[test]
fn test_digit_counts_for_negative() {
    for (value, expected) in [(-1, 2), (-10, 3), (-999, 4)] {
        let root = rolling_number(value).render();
        assert_eq!(root.find_all(classes::DIGIT).len(), expected, "value {value}");
    }
}

#[test]
fn test_animation_triggers_on_value_change() {
    let mut widget = rolling_number(100);
    let initial = first_digit_style(&widget);

    widget.set_parameters(RollingNumberProps::new(200));

    assert_ne!(first_digit_style(&widget), initial);
}

#[test]
fn test_no_animation_when_value_unchanged() {
    let mut widget = RollingNumber::new(RollingNumberProps::new(100).minimum_digits(5));
    let initial = first_digit_style(&widget);
    let leading_one = widget.state().slot_at_place(2).copied();

    let outcome = widget.set_parameters(RollingNumberProps::new(100).minimum_digits(6));

    assert!(!outcome.is_roll());
    assert_eq!(outcome.phase(), AnimationPhase::Idle);
    assert_eq!(first_digit_style(&widget), initial);
    assert_eq!(
        widget
            .state()
            .slot_at_place(2)
            .map(|slot| slot.offset_percent),
        leading_one.map(|slot| slot.offset_percent)
    );
}

#[test]
fn test_supports_custom_easing() {
    let root = rolling_number(123)
        .easing("cubic-bezier(0.4, 0, 0.2, 1)")
        .render();
    let style = root.find(classes::ROOT).and_then(|el| el.attribute("style"));
    assert!(style.unwrap().contains("cubic-bezier(0.4, 0, 0.2, 1)"));
}

#[test]
fn test_supports_custom_duration() {
    let root = rolling_number(123).duration("0.5s").render();
    let style = root.find(classes::ROOT).and_then(|el| el.attribute("style"));
    assert!(style.unwrap().contains("0.5s"));
}

#[test]
fn test_instances_are_independent() {
    let mut first = rolling_number(1);
    let second = rolling_number(1);

    first.set_parameters(RollingNumberProps::new(2));

    assert_eq!(first.state().current_value(), 2);
    assert_eq!(second.state().current_value(), 1);
}
