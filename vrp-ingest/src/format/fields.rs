#[cfg(test)]
#[path = "../../tests/unit/format/fields_test.rs"]
mod fields_test;

use serde_json::Value;

use crate::error::Error;
use crate::models::common::{Amount, Coordinates, Duration, Id, Priority, Skill, Skills, TimeWindow};

/// Pulls a coordinate pair out of `object[key]`: an array of length >= 2
/// whose first two elements are numeric.
///
/// The key is indexed unconditionally: callers assert its presence where the
/// schema requires it, and a missing key fails the same way as a malformed
/// one.
pub(crate) fn get_coordinates(object: &Value, key: &str) -> Result<Coordinates, Error> {
    let invalid = || Error::input(format!("Invalid {key} array."));

    let array = object[key].as_array().ok_or_else(invalid)?;
    if array.len() < 2 {
        return Err(invalid());
    }

    match (array[0].as_f64(), array[1].as_f64()) {
        (Some(lon), Some(lat)) => Ok(Coordinates { lon, lat }),
        _ => Err(invalid()),
    }
}

/// Pulls an optional string out of `object[key]`, defaulting to empty.
pub(crate) fn get_string(object: &Value, key: &str) -> Result<String, Error> {
    match object.get(key) {
        Some(value) => {
            value.as_str().map(ToString::to_string).ok_or_else(|| Error::input(format!("Invalid {key} value.")))
        }
        None => Ok(String::new()),
    }
}

/// Pulls an amount of the problem wide dimensionality out of `object[key]`.
///
/// An absent key defaults to a zero amount of the declared size; a present
/// one must be an array of exactly `size` non-negative integers.
pub(crate) fn get_amount(object: &Value, key: &str, size: usize) -> Result<Amount, Error> {
    let Some(field) = object.get(key) else {
        return Ok(Amount::zeros(size));
    };

    let array = field.as_array().ok_or_else(|| Error::input(format!("Invalid {key} array.")))?;

    if array.len() != size {
        return Err(Error::input(format!("Inconsistent {key} length: {} and {size}.", array.len())));
    }

    array
        .iter()
        .map(|value| value.as_u64().ok_or_else(|| Error::input(format!("Invalid {key} value."))))
        .collect::<Result<Vec<_>, _>>()
        .map(Amount::new)
}

/// Pulls a skill set out of the `skills` key, defaulting to an empty set.
/// Duplicates collapse silently.
pub(crate) fn get_skills(object: &Value) -> Result<Skills, Error> {
    let Some(field) = object.get("skills") else {
        return Ok(Skills::default());
    };

    let array = field.as_array().ok_or_else(|| Error::input("Invalid skills object."))?;

    array
        .iter()
        .map(|value| {
            value
                .as_u64()
                .and_then(|skill| Skill::try_from(skill).ok())
                .ok_or_else(|| Error::input("Invalid skill value."))
        })
        .collect()
}

/// Pulls a service duration out of the `service` key, defaulting to zero.
pub(crate) fn get_service(object: &Value) -> Result<Duration, Error> {
    match object.get("service") {
        Some(value) => value.as_u64().ok_or_else(|| Error::input("Invalid service value.")),
        None => Ok(0),
    }
}

/// Pulls a priority within `0..=max_priority`, defaulting to zero.
pub(crate) fn get_priority(object: &Value, max_priority: Priority) -> Result<Priority, Error> {
    let Some(value) = object.get("priority") else {
        return Ok(0);
    };

    value
        .as_u64()
        .and_then(|priority| Priority::try_from(priority).ok())
        .filter(|priority| *priority <= max_priority)
        .ok_or_else(|| Error::input("Invalid priority value."))
}

/// Pulls a single time window out of a 2-element numeric array.
pub(crate) fn get_time_window(value: &Value) -> Result<TimeWindow, Error> {
    let invalid = || Error::input("Invalid time-window.");

    let array = value.as_array().ok_or_else(invalid)?;
    if array.len() < 2 {
        return Err(invalid());
    }

    match (array[0].as_u64(), array[1].as_u64()) {
        (Some(start), Some(end)) => Ok(TimeWindow::new(start, end)),
        _ => Err(invalid()),
    }
}

/// Pulls an optional vehicle time window, defaulting to the whole horizon.
pub(crate) fn get_vehicle_time_window(object: &Value) -> Result<TimeWindow, Error> {
    match object.get("time_window") {
        Some(value) => get_time_window(value),
        None => Ok(TimeWindow::default()),
    }
}

/// Pulls job time windows: a non-empty list sorted ascending when the key is
/// present, a single whole-horizon window otherwise.
pub(crate) fn get_job_time_windows(object: &Value, id: Id) -> Result<Vec<TimeWindow>, Error> {
    let Some(field) = object.get("time_windows") else {
        return Ok(vec![TimeWindow::default()]);
    };

    let windows = field
        .as_array()
        .filter(|array| !array.is_empty())
        .ok_or_else(|| Error::input(format!("Invalid time_windows array for job {id}.")))?;

    sorted_time_windows(windows)
}

/// Pulls break time windows: the key is mandatory and the list non-empty.
pub(crate) fn get_break_time_windows(object: &Value, id: Id) -> Result<Vec<TimeWindow>, Error> {
    let windows = object
        .get("time_windows")
        .and_then(Value::as_array)
        .filter(|array| !array.is_empty())
        .ok_or_else(|| Error::input(format!("Invalid time_windows array for break {id}.")))?;

    sorted_time_windows(windows)
}

fn sorted_time_windows(windows: &[Value]) -> Result<Vec<TimeWindow>, Error> {
    let mut tws = windows.iter().map(get_time_window).collect::<Result<Vec<_>, _>>()?;
    tws.sort();

    Ok(tws)
}
