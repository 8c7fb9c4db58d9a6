#[cfg(test)]
#[path = "../../tests/unit/format/entities_test.rs"]
mod entities_test;

use serde_json::Value;

use crate::error::Error;
use crate::format::fields::{
    get_amount, get_break_time_windows, get_coordinates, get_skills, get_service, get_string,
    get_vehicle_time_window,
};
use crate::models::common::{Id, Index, Location};
use crate::models::{Break, ForcedService, JobKind, StepKind, Vehicle, VehicleStep};

/// Asserts the node is an object carrying a 64-bit unsigned `id` and returns
/// the id.
pub(crate) fn check_id(node: &Value, kind: &str) -> Result<Id, Error> {
    if !node.is_object() {
        return Err(Error::input(format!("Invalid {kind}.")));
    }

    node.get("id").and_then(Value::as_u64).ok_or_else(|| Error::input(format!("Invalid or missing id for {kind}.")))
}

/// Asserts the node is a shipment object carrying object-typed `pickup` and
/// `delivery` sub objects.
pub(crate) fn check_shipment(node: &Value) -> Result<(), Error> {
    if !node.is_object() {
        return Err(Error::input("Invalid shipment."));
    }
    if !node["pickup"].is_object() {
        return Err(Error::input("Missing pickup for shipment."));
    }
    if !node["delivery"].is_object() {
        return Err(Error::input("Missing delivery for shipment."));
    }

    Ok(())
}

/// Asserts a matrix reference present and within bounds and returns it.
pub(crate) fn check_location_index(node: &Value, kind: &str, id: Id, matrix_size: usize) -> Result<Index, Error> {
    let index = node
        .get("location_index")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::input(format!("Invalid location_index for {kind} {id}.")))? as Index;

    if index >= matrix_size {
        return Err(Error::input(format!("location_index exceeding matrix size for {kind} {id}.")));
    }

    Ok(index)
}

/// Asserts coordinate presence; used in routing-engine mode where locations
/// are mandatory.
pub(crate) fn check_location(node: &Value, kind: &str, id: Id) -> Result<(), Error> {
    if !node["location"].is_array() {
        return Err(Error::input(format!("Invalid location for {kind} {id}.")));
    }

    Ok(())
}

/// Builds a break entity; its `time_windows` key is mandatory.
pub(crate) fn get_break(node: &Value) -> Result<Break, Error> {
    let id = check_id(node, "break")?;

    Ok(Break {
        id,
        time_windows: get_break_time_windows(node, id)?,
        service: get_service(node)?,
        description: get_string(node, "description")?,
    })
}

/// Builds vehicle breaks sorted ascending by their first time window.
/// Breaks with equal first windows keep declaration order.
pub(crate) fn get_vehicle_breaks(node: &Value, vehicle_id: Id) -> Result<Vec<Break>, Error> {
    let mut breaks = match node.get("breaks") {
        Some(field) => field
            .as_array()
            .ok_or_else(|| Error::input(format!("Invalid breaks for vehicle {vehicle_id}.")))?
            .iter()
            .map(get_break)
            .collect::<Result<Vec<_>, _>>()?,
        None => vec![],
    };

    // Stable sort: ties on the first window keep relative input order.
    breaks.sort_by_key(|br| br.time_windows[0]);

    Ok(breaks)
}

/// Builds the optional pre-assigned plan of a vehicle, in declaration order.
pub(crate) fn get_vehicle_steps(node: &Value, vehicle_id: Id) -> Result<Vec<VehicleStep>, Error> {
    let Some(field) = node.get("steps") else {
        return Ok(vec![]);
    };

    let steps = field.as_array().ok_or_else(|| Error::input(format!("Invalid steps for vehicle {vehicle_id}.")))?;

    steps.iter().map(|step| get_vehicle_step(step, vehicle_id)).collect()
}

fn get_vehicle_step(node: &Value, vehicle_id: Id) -> Result<VehicleStep, Error> {
    let forced_service = ForcedService {
        at: get_forced_timestamp(node, "service_at")?,
        after: get_forced_timestamp(node, "service_after")?,
        before: get_forced_timestamp(node, "service_before")?,
    };

    let step_type = get_string(node, "type")?;
    let kind = match step_type.as_str() {
        "start" => StepKind::Start,
        "end" => StepKind::End,
        other => {
            let id = node
                .get("id")
                .and_then(Value::as_u64)
                .ok_or_else(|| Error::input(format!("Invalid id in steps for vehicle {vehicle_id}.")))?;

            match other {
                "job" => StepKind::Job { id, kind: JobKind::Single },
                "pickup" => StepKind::Job { id, kind: JobKind::Pickup },
                "delivery" => StepKind::Job { id, kind: JobKind::Delivery },
                "break" => StepKind::Break { id },
                _ => return Err(Error::input(format!("Invalid type in steps for vehicle {vehicle_id}."))),
            }
        }
    };

    Ok(VehicleStep { kind, forced_service })
}

fn get_forced_timestamp(node: &Value, key: &str) -> Result<Option<u64>, Error> {
    node.get(key).map(|value| value.as_u64().ok_or_else(|| Error::input(format!("Invalid {key} value.")))).transpose()
}

/// Builds a vehicle entity; `default_profile` applies when the node does not
/// declare a profile of its own.
pub(crate) fn get_vehicle(node: &Value, amount_size: usize, default_profile: &str) -> Result<Vehicle, Error> {
    let id = check_id(node, "vehicle")?;

    let start = get_boundary(node, "start", "start_index", id)?;
    let end = get_boundary(node, "end", "end_index", id)?;

    let mut profile = get_string(node, "profile")?;
    if profile.is_empty() {
        profile = default_profile.to_string();
    }

    Ok(Vehicle {
        id,
        start,
        end,
        capacity: get_amount(node, "capacity", amount_size)?,
        skills: get_skills(node)?,
        time_window: get_vehicle_time_window(node)?,
        breaks: get_vehicle_breaks(node, id)?,
        description: get_string(node, "description")?,
        profile,
        steps: get_vehicle_steps(node, id)?,
    })
}

/// Derives an optional boundary location from independent coordinate and
/// index keys; any combination is legal and index plus coordinates produce a
/// location carrying both representations.
fn get_boundary(node: &Value, coords_key: &str, index_key: &str, vehicle_id: Id) -> Result<Option<Location>, Error> {
    let has_coords = node.get(coords_key).is_some();

    let index = node
        .get(index_key)
        .map(|value| {
            value
                .as_u64()
                .map(|index| index as Index)
                .ok_or_else(|| Error::input(format!("Invalid {index_key} for vehicle {vehicle_id}.")))
        })
        .transpose()?;

    match (index, has_coords) {
        (Some(index), true) => Ok(Some(Location::with_coordinates(index, get_coordinates(node, coords_key)?))),
        (Some(index), false) => Ok(Some(Location::from_index(index))),
        (None, true) => Ok(Some(Location::from_coordinates(get_coordinates(node, coords_key)?))),
        (None, false) => Ok(None),
    }
}
