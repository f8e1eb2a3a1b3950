use chrono::NaiveDateTime;
use rtablets::core::calculator::remaining::{days_elapsed, days_remaining};
use rtablets::core::calculator::reorder::{ReorderAdvice, ReorderPolicy, reorder_advice};
use rtablets::core::calculator::usage::daily_usage;
use rtablets::core::logic::Core;
use rtablets::models::tablet::{TabletInput, TabletRecord};
use rtablets::utils::days_label;

mod common;
use common::ts;

const UPDATED: &str = "2025-03-01 08:00:00";

/// A valid stored row, last updated at UPDATED.
fn record(doses: (bool, bool, bool), strip_size: i64, strips_owned: i64) -> TabletRecord {
    TabletInput::new("Metformin", doses, strip_size, strips_owned)
        .into_record(ts(UPDATED))
        .expect("valid input")
}

fn days_after(days: i64) -> NaiveDateTime {
    ts(UPDATED) + chrono::Duration::days(days)
}

#[test]
fn test_daily_usage_counts_set_dose_slots() {
    assert_eq!(daily_usage(&record((false, false, false), 10, 1)), 0);
    assert_eq!(daily_usage(&record((true, false, false), 10, 1)), 1);
    assert_eq!(daily_usage(&record((true, false, true), 10, 1)), 2);
    assert_eq!(daily_usage(&record((false, true, true), 10, 1)), 2);
    assert_eq!(daily_usage(&record((true, true, true), 10, 1)), 3);
}

#[test]
fn test_days_remaining_after_elapsed_consumption() {
    // 10 x 3 = 30 pills, 2 per day, 5 days later → (30 - 10) / 2
    let rec = record((true, false, true), 10, 3);
    assert_eq!(rec.total_stock, 30);
    assert_eq!(days_elapsed(&rec, days_after(5)), 5);
    assert_eq!(days_remaining(&rec, days_after(5)), Some(10));
}

#[test]
fn test_days_remaining_truncates_toward_zero() {
    // 31 pills, 2/day, no time elapsed → 15.5 → 15
    let rec = record((true, true, false), 31, 1);
    assert_eq!(days_remaining(&rec, ts(UPDATED)), Some(15));
}

#[test]
fn test_negative_days_remaining_is_not_clamped() {
    // 5 pills, 3/day, 4 days later → (5 - 12) / 3 = -2
    let rec = record((true, true, true), 5, 1);
    assert_eq!(days_remaining(&rec, days_after(4)), Some(-2));
}

#[test]
fn test_zero_usage_has_no_days_remaining() {
    let rec = record((false, false, false), 10, 3);
    assert_eq!(days_remaining(&rec, days_after(10)), None);
    assert_eq!(
        reorder_advice(&rec, days_after(10), &ReorderPolicy::default()),
        ReorderAdvice {
            should_warn: false,
            strips_to_order: 0
        }
    );
}

#[test]
fn test_days_elapsed_truncates_partial_days() {
    let rec = record((true, false, false), 10, 1);
    assert_eq!(days_elapsed(&rec, ts("2025-03-07 07:59:59")), 5);
    assert_eq!(days_elapsed(&rec, ts("2025-03-07 08:00:00")), 6);
}

#[test]
fn test_days_elapsed_never_negative() {
    let rec = record((true, false, false), 10, 1);
    assert_eq!(days_elapsed(&rec, ts("2025-01-01 00:00:00")), 0);
    assert_eq!(days_remaining(&rec, ts("2025-01-01 00:00:00")), Some(10));
}

#[test]
fn test_reorder_warns_and_rounds_strips_up() {
    // 40 pills, 2/day → 20 days ≤ 30; need 60 - 40 = 20 pills
    let policy = ReorderPolicy::default();

    let rec = record((true, false, true), 10, 4);
    let advice = reorder_advice(&rec, ts(UPDATED), &policy);
    assert!(advice.should_warn);
    assert_eq!(advice.strips_to_order, 2);

    // same 40 pills as 5 strips of 8 → ceil(20 / 8) = 3
    let rec = record((true, false, true), 8, 5);
    let advice = reorder_advice(&rec, ts(UPDATED), &policy);
    assert!(advice.should_warn);
    assert_eq!(advice.strips_to_order, 3);
}

#[test]
fn test_reorder_threshold_is_inclusive() {
    let policy = ReorderPolicy::default();

    // exactly 30 days left
    let at_threshold = record((true, false, true), 60, 1);
    assert_eq!(days_remaining(&at_threshold, ts(UPDATED)), Some(30));
    assert!(reorder_advice(&at_threshold, ts(UPDATED), &policy).should_warn);

    // 31 days left
    let above = record((true, false, true), 62, 1);
    assert_eq!(
        reorder_advice(&above, ts(UPDATED), &policy),
        ReorderAdvice::default()
    );
}

#[test]
fn test_reorder_quantity_ignores_elapsed_consumption() {
    // 90 pills, 3/day, 20 days later → 10 days left (warn), but the stored
    // snapshot of 90 pills already covers 30 days → nothing to order
    let rec = record((true, true, true), 30, 3);
    let advice = reorder_advice(&rec, days_after(20), &ReorderPolicy::default());
    assert!(advice.should_warn);
    assert_eq!(advice.strips_to_order, 0);
}

#[test]
fn test_reorder_with_empty_stock() {
    let rec = record((true, false, false), 14, 0);
    let advice = reorder_advice(&rec, ts(UPDATED), &ReorderPolicy::default());
    assert!(advice.should_warn);
    // 30 pills needed, strips of 14 → 3
    assert_eq!(advice.strips_to_order, 3);
}

#[test]
fn test_custom_policy() {
    let policy = ReorderPolicy {
        threshold_days: 60,
        coverage_days: 90,
    };
    // 50 days left with one dose a day
    let rec = record((false, false, true), 10, 5);
    let advice = reorder_advice(&rec, ts(UPDATED), &policy);
    assert!(advice.should_warn);
    // 90 - 50 = 40 pills → 4 strips
    assert_eq!(advice.strips_to_order, 4);
}

#[test]
fn test_no_strips_suggested_without_warning() {
    let policy = ReorderPolicy::default();
    let dose_sets = [
        (false, false, false),
        (true, false, false),
        (true, true, false),
        (true, true, true),
    ];

    for doses in dose_sets {
        for strips in [0, 1, 3, 7, 20] {
            for elapsed in [0, 3, 15, 40, 120] {
                let rec = record(doses, 10, strips);
                let advice = reorder_advice(&rec, days_after(elapsed), &policy);
                if !advice.should_warn {
                    assert_eq!(
                        advice.strips_to_order, 0,
                        "doses={doses:?} strips={strips} elapsed={elapsed}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_project_combines_all_values() {
    let rec = record((true, false, true), 10, 4);
    let proj = Core::project(&rec, days_after(5), &ReorderPolicy::default()).expect("project");

    assert_eq!(proj.daily_usage, 2);
    assert_eq!(proj.days_elapsed, 5);
    assert_eq!(proj.days_remaining, Some(15));
    assert!(proj.should_warn);
    assert_eq!(proj.strips_to_order, 2);
    assert_eq!(days_label(proj.days_remaining), "15 days");
}

#[test]
fn test_project_rejects_inconsistent_record() {
    let mut rec = record((true, false, false), 10, 3);
    rec.total_stock = 99;

    let err = Core::project(&rec, ts(UPDATED), &ReorderPolicy::default()).unwrap_err();
    assert!(err.is_validation(), "unexpected error: {err}");

    let mut rec = record((true, false, false), 10, 3);
    rec.strip_size = 0;
    rec.total_stock = 0;
    assert!(
        Core::project(&rec, ts(UPDATED), &ReorderPolicy::default())
            .unwrap_err()
            .is_validation()
    );
}

#[test]
fn test_project_all_sets_aside_invalid_rows() {
    let good = record((true, false, true), 10, 4);

    let mut broken = record((true, false, false), 10, 3);
    broken.name = "Ibuprofen".to_string();
    broken.total_stock = 99;

    // blank key left behind by another tool: stock is consistent, so it projects
    let mut blank = record((false, true, false), 5, 2);
    blank.name = "  ".to_string();

    let projected = Core::project_all(
        &[good.clone(), broken, blank],
        days_after(5),
        &ReorderPolicy::default(),
    );

    let names: Vec<&str> = projected.rows.iter().map(|(r, _)| r.name.as_str()).collect();
    assert_eq!(names, ["Metformin", "  "]);
    assert_eq!(projected.rows[0].1.days_remaining, Some(15));
    assert_eq!(projected.rows[1].1.days_remaining, Some(5));

    assert_eq!(projected.rejected.len(), 1);
    let (name, err) = &projected.rejected[0];
    assert_eq!(name, "Ibuprofen");
    assert!(err.is_validation(), "unexpected error: {err}");
}

#[test]
fn test_blank_stored_name_passes_invariant_check() {
    let mut rec = record((true, false, false), 10, 1);
    rec.name = "   ".to_string();
    assert!(rec.check_invariants().is_ok());

    rec.name.clear();
    assert!(rec.check_invariants().unwrap_err().is_validation());
}
