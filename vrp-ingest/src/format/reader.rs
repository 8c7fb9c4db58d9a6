//! The document orchestrator: validates the top-level document shape,
//! chooses between explicit-matrix and routing-engine modes and assembles
//! the aggregate [`Input`] model.

#[cfg(test)]
#[path = "../../tests/unit/format/reader_test.rs"]
mod reader_test;

use log::debug;
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;
use crate::format::entities::{
    check_id, check_location, check_location_index, check_shipment, get_vehicle,
};
use crate::format::fields::{
    get_amount, get_coordinates, get_job_time_windows, get_priority, get_service, get_skills, get_string,
};
use crate::models::common::{Amount, Id, Index, Location, Priority, Skills};
use crate::models::{CostMatrix, Input, Job, JobKind};
use crate::routing::resolve_router;

/// Parses and validates a json problem document into the aggregate model.
///
/// The first violated invariant aborts the whole parse: no partial aggregate
/// is ever returned and errors are not aggregated.
pub fn read_input(text: &str, config: &Config) -> Result<Input, Error> {
    let document: Value = serde_json::from_str(text).map_err(|err| Error::input(err.to_string()))?;

    let has_jobs = document["jobs"].as_array().is_some_and(|jobs| !jobs.is_empty());
    let has_shipments = document["shipments"].as_array().is_some_and(|shipments| !shipments.is_empty());
    if !has_jobs && !has_shipments {
        return Err(Error::input("Invalid jobs or shipments."));
    }

    let vehicles = document["vehicles"]
        .as_array()
        .filter(|vehicles| !vehicles.is_empty())
        .ok_or_else(|| Error::input("Invalid vehicles."))?;

    // The first vehicle imposes the amount dimensionality on the whole
    // document.
    check_id(&vehicles[0], "vehicle")?;
    let amount_size = vehicles[0]["capacity"].as_array().map_or(0, |capacity| capacity.len());

    let mut input = Input::new(amount_size);
    input.set_geometry(config.geometry);

    for node in vehicles {
        input.add_vehicle(get_vehicle(node, amount_size, &config.default_profile)?);
    }

    // The first vehicle's profile selects the routing backend; later
    // profiles are parsed but not reconciled against it.
    let common_profile = input.vehicles()[0].profile.clone();

    debug!("parsed {} vehicles, common profile '{}', amount size {}", input.vehicles().len(), common_profile, amount_size);

    match document.get("matrix") {
        Some(value) => {
            let matrix = get_matrix(value)?;
            let matrix_size = matrix.size();
            input.set_matrix(matrix);

            for node in document["jobs"].as_array().into_iter().flatten() {
                let id = check_id(node, "job")?;
                let index = check_location_index(node, "job", id, matrix_size)?;

                input.add_job(get_job(node, id, get_indexed_location(node, index)?, amount_size, config)?);
            }

            for node in document["shipments"].as_array().into_iter().flatten() {
                check_shipment(node)?;
                let shared = get_shared_shipment(node, amount_size, config)?;

                let pickup_node = &node["pickup"];
                let pickup_id = check_id(pickup_node, "pickup")?;
                let pickup_index = check_location_index(pickup_node, "pickup", pickup_id, matrix_size)?;
                let pickup = get_shipment_leg(
                    pickup_node,
                    pickup_id,
                    JobKind::Pickup,
                    get_indexed_location(pickup_node, pickup_index)?,
                    &shared,
                )?;

                let delivery_node = &node["delivery"];
                let delivery_id = check_id(delivery_node, "delivery")?;
                let delivery_index = check_location_index(delivery_node, "delivery", delivery_id, matrix_size)?;
                let delivery = get_shipment_leg(
                    delivery_node,
                    delivery_id,
                    JobKind::Delivery,
                    get_indexed_location(delivery_node, delivery_index)?,
                    &shared,
                )?;

                input.add_shipment(pickup, delivery);
            }
        }
        None => {
            // No matrix supplied: costs will be computed by the routing
            // backend from coordinates, which are therefore mandatory.
            for node in document["jobs"].as_array().into_iter().flatten() {
                let id = check_id(node, "job")?;
                check_location(node, "job", id)?;
                let location = Location::from_coordinates(get_coordinates(node, "location")?);

                input.add_job(get_job(node, id, location, amount_size, config)?);
            }

            for node in document["shipments"].as_array().into_iter().flatten() {
                check_shipment(node)?;
                let shared = get_shared_shipment(node, amount_size, config)?;

                let pickup_node = &node["pickup"];
                let pickup_id = check_id(pickup_node, "pickup")?;
                check_location(pickup_node, "pickup", pickup_id)?;
                let pickup = get_shipment_leg(
                    pickup_node,
                    pickup_id,
                    JobKind::Pickup,
                    Location::from_coordinates(get_coordinates(pickup_node, "location")?),
                    &shared,
                )?;

                let delivery_node = &node["delivery"];
                let delivery_id = check_id(delivery_node, "delivery")?;
                check_location(delivery_node, "delivery", delivery_id)?;
                let delivery = get_shipment_leg(
                    delivery_node,
                    delivery_id,
                    JobKind::Delivery,
                    Location::from_coordinates(get_coordinates(delivery_node, "location")?),
                    &shared,
                )?;

                input.add_shipment(pickup, delivery);
            }
        }
    }

    debug!("ingested {} jobs and {} shipments", input.jobs().len(), input.shipments().len());

    input.set_router(resolve_router(config, &common_profile)?);

    Ok(input)
}

/// Extracts and validates the explicit square cost matrix.
fn get_matrix(value: &Value) -> Result<CostMatrix, Error> {
    let rows = value.as_array().ok_or_else(|| Error::input("Invalid matrix."))?;
    let size = rows.len();

    let mut matrix = CostMatrix::new(size);
    for (i, row) in rows.iter().enumerate() {
        let row = row
            .as_array()
            .filter(|row| row.len() == size)
            .ok_or_else(|| Error::input(format!("Invalid matrix line {i}.")))?;

        for (j, cell) in row.iter().enumerate() {
            let cost = cell.as_u64().ok_or_else(|| Error::input(format!("Invalid matrix entry ({i},{j}).")))?;
            matrix.set(i, j, cost);
        }
    }

    Ok(matrix)
}

/// Resolves a matrix-mode location: the checked index, plus coordinates when
/// they are supplied for output geometry.
fn get_indexed_location(node: &Value, index: Index) -> Result<Location, Error> {
    if node.get("location").is_some() {
        Ok(Location::with_coordinates(index, get_coordinates(node, "location")?))
    } else {
        Ok(Location::from_index(index))
    }
}

/// Composes a single job.
///
/// Compatibility shim: when no `pickup` and `delivery` keys are defined and
/// the deprecated `amount` key is present, it is interpreted as a delivery.
fn get_job(node: &Value, id: Id, location: Location, amount_size: usize, config: &Config) -> Result<Job, Error> {
    let delivery_key =
        if node.get("amount").is_some() && node.get("delivery").is_none() && node.get("pickup").is_none() {
            "amount"
        } else {
            "delivery"
        };

    Ok(Job {
        id,
        kind: JobKind::Single,
        location,
        service: get_service(node)?,
        delivery: get_amount(node, delivery_key, amount_size)?,
        pickup: get_amount(node, "pickup", amount_size)?,
        skills: get_skills(node)?,
        priority: get_priority(node, config.max_priority)?,
        time_windows: get_job_time_windows(node, id)?,
        description: get_string(node, "description")?,
    })
}

/// The amount, skill set and priority shared by both legs of a shipment.
struct SharedShipment {
    amount: Amount,
    skills: Skills,
    priority: Priority,
}

fn get_shared_shipment(node: &Value, amount_size: usize, config: &Config) -> Result<SharedShipment, Error> {
    Ok(SharedShipment {
        amount: get_amount(node, "amount", amount_size)?,
        skills: get_skills(node)?,
        priority: get_priority(node, config.max_priority)?,
    })
}

/// Composes a shipment leg around the shared amount/skills/priority triple.
fn get_shipment_leg(
    node: &Value,
    id: Id,
    kind: JobKind,
    location: Location,
    shared: &SharedShipment,
) -> Result<Job, Error> {
    let zeros = Amount::zeros(shared.amount.len());
    let (pickup, delivery) = if matches!(kind, JobKind::Pickup) {
        (shared.amount.clone(), zeros)
    } else {
        (zeros, shared.amount.clone())
    };

    Ok(Job {
        id,
        kind,
        location,
        service: get_service(node)?,
        delivery,
        pickup,
        skills: shared.skills.clone(),
        priority: shared.priority,
        time_windows: get_job_time_windows(node, id)?,
        description: get_string(node, "description")?,
    })
}
