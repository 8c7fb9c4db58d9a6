use proptest::prelude::*;
use serde_json::json;

use super::*;

#[test]
fn can_get_coordinates() {
    let node = json!({ "location": [2.35, 48.85, 100] });

    assert_eq!(get_coordinates(&node, "location").unwrap(), Coordinates { lon: 2.35, lat: 48.85 });
}

parameterized_test! {can_detect_invalid_coordinates, node, {
    assert_eq!(get_coordinates(&node, "location").unwrap_err(), Error::input("Invalid location array."));
}}

can_detect_invalid_coordinates! {
    case01_missing: json!({}),
    case02_not_array: json!({ "location": "somewhere" }),
    case03_too_short: json!({ "location": [2.35] }),
    case04_not_numeric: json!({ "location": ["2.35", "48.85"] }),
}

#[test]
fn can_get_optional_string() {
    assert_eq!(get_string(&json!({}), "description").unwrap(), "");
    assert_eq!(get_string(&json!({ "description": "dropoff" }), "description").unwrap(), "dropoff");
    assert_eq!(
        get_string(&json!({ "description": 42 }), "description").unwrap_err(),
        Error::input("Invalid description value.")
    );
}

parameterized_test! {can_get_amount, (node, size, expected), {
    assert_eq!(get_amount(&node, "delivery", size), expected);
}}

can_get_amount! {
    case01_absent_defaults_to_zeros: (json!({}), 3, Ok(Amount::zeros(3))),
    case02_valid: (json!({ "delivery": [1, 2] }), 2, Ok(Amount::new(vec![1, 2]))),
    case03_not_array: (json!({ "delivery": 1 }), 1, Err(Error::input("Invalid delivery array."))),
    case04_length_mismatch: (json!({ "delivery": [1, 2] }), 3, Err(Error::input("Inconsistent delivery length: 2 and 3."))),
    case05_negative: (json!({ "delivery": [1, -2] }), 2, Err(Error::input("Invalid delivery value."))),
    case06_fractional: (json!({ "delivery": [1.5, 2] }), 2, Err(Error::input("Invalid delivery value."))),
}

#[test]
fn can_get_skills() {
    assert_eq!(get_skills(&json!({})).unwrap(), Skills::default());
    assert_eq!(get_skills(&json!({ "skills": [1, 5, 1] })).unwrap(), Skills::from([1, 5]));
    assert_eq!(get_skills(&json!({ "skills": 1 })).unwrap_err(), Error::input("Invalid skills object."));
    assert_eq!(get_skills(&json!({ "skills": [-1] })).unwrap_err(), Error::input("Invalid skill value."));
}

#[test]
fn can_get_service() {
    assert_eq!(get_service(&json!({})).unwrap(), 0);
    assert_eq!(get_service(&json!({ "service": 300 })).unwrap(), 300);
    assert_eq!(get_service(&json!({ "service": -1 })).unwrap_err(), Error::input("Invalid service value."));
}

parameterized_test! {can_get_priority, (node, expected), {
    assert_eq!(get_priority(&node, 100), expected);
}}

can_get_priority! {
    case01_default: (json!({}), Ok(0)),
    case02_at_max: (json!({ "priority": 100 }), Ok(100)),
    case03_above_max: (json!({ "priority": 101 }), Err(Error::input("Invalid priority value."))),
    case04_negative: (json!({ "priority": -1 }), Err(Error::input("Invalid priority value."))),
}

#[test]
fn can_get_time_window() {
    assert_eq!(get_time_window(&json!([100, 200])).unwrap(), TimeWindow::new(100, 200));
    assert_eq!(get_time_window(&json!([100])).unwrap_err(), Error::input("Invalid time-window."));
    assert_eq!(get_time_window(&json!("100-200")).unwrap_err(), Error::input("Invalid time-window."));
    assert_eq!(get_time_window(&json!([-100, 200])).unwrap_err(), Error::input("Invalid time-window."));
}

#[test]
fn can_get_vehicle_time_window() {
    assert_eq!(get_vehicle_time_window(&json!({})).unwrap(), TimeWindow::default());
    assert_eq!(get_vehicle_time_window(&json!({ "time_window": [10, 20] })).unwrap(), TimeWindow::new(10, 20));
}

#[test]
fn can_get_job_time_windows() {
    assert_eq!(get_job_time_windows(&json!({}), 1).unwrap(), vec![TimeWindow::default()]);

    let node = json!({ "time_windows": [[300, 400], [100, 200]] });
    assert_eq!(
        get_job_time_windows(&node, 1).unwrap(),
        vec![TimeWindow::new(100, 200), TimeWindow::new(300, 400)]
    );

    assert_eq!(
        get_job_time_windows(&json!({ "time_windows": [] }), 7).unwrap_err(),
        Error::input("Invalid time_windows array for job 7.")
    );
}

#[test]
fn can_get_break_time_windows() {
    let node = json!({ "time_windows": [[100, 200]] });
    assert_eq!(get_break_time_windows(&node, 3).unwrap(), vec![TimeWindow::new(100, 200)]);

    assert_eq!(
        get_break_time_windows(&json!({}), 3).unwrap_err(),
        Error::input("Invalid time_windows array for break 3.")
    );
}

proptest! {
    #[test]
    fn sorts_time_windows_preserving_multiset(windows in prop::collection::vec((0u64..1000, 0u64..1000), 1..8)) {
        let node = json!({
            "time_windows": windows.iter().map(|(start, end)| json!([start, end])).collect::<Vec<_>>()
        });

        let tws = get_job_time_windows(&node, 1).unwrap();

        let mut expected = windows.iter().map(|&(start, end)| TimeWindow::new(start, end)).collect::<Vec<_>>();
        expected.sort();

        prop_assert_eq!(tws, expected);
    }
}
