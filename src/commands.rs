//! Maps parsed CLI commands onto the use cases and renders the results.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::{BranchAction, Command, VehicleAction, YardAction};
use vision_hive::adapters::outbound::memory::{
    InMemoryBranchRepository, InMemoryStore, InMemoryVehicleRepository, InMemoryYardRepository,
};
use vision_hive::application::dto::{
    BranchResponse, PageResponse, VehicleResponse, YardRequest, YardResponse,
};
use vision_hive::application::use_cases::{BranchUseCase, VehicleUseCase, YardUseCase};
use vision_hive::hierarchy::policies::CapacityPolicy;
use vision_hive::hierarchy::services::PaginationConfig;
use vision_hive::shared::CancelSignal;

/// What a command produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// JSON document for stdout
    Found(Value),
    /// The addressed record does not exist
    NotFound(String),
}

/// Settings shared by every command in one process run.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub pagination: PaginationConfig,
    pub capacity_policy: CapacityPolicy,
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to render response as JSON")
}

fn not_found(kind: &str, id: impl std::fmt::Display) -> Outcome {
    Outcome::NotFound(format!("{} {} not found", kind, id))
}

fn deleted(kind: &str, id: impl std::fmt::Display) -> Outcome {
    Outcome::Found(json!({ "deleted": kind, "id": id.to_string() }))
}

pub async fn execute(
    command: Command,
    store: &InMemoryStore,
    settings: Settings,
    cancel: &CancelSignal,
) -> Result<Outcome> {
    match command {
        Command::Branch { action } => {
            let use_case = BranchUseCase::new(
                InMemoryBranchRepository::new(store.clone()),
                settings.pagination,
            );
            branch(action, &use_case, cancel).await
        }
        Command::Yard { action } => {
            let use_case = YardUseCase::new(
                InMemoryYardRepository::new(store.clone()),
                settings.pagination,
            );
            yard(action, &use_case, cancel).await
        }
        Command::Vehicle { action } => {
            let use_case = VehicleUseCase::new(
                InMemoryVehicleRepository::new(store.clone()),
                settings.pagination,
                settings.capacity_policy,
            );
            vehicle(action, &use_case, cancel).await
        }
    }
}

async fn branch(
    action: BranchAction,
    use_case: &BranchUseCase<InMemoryBranchRepository>,
    cancel: &CancelSignal,
) -> Result<Outcome> {
    match action {
        BranchAction::Create(fields) => {
            let branch = use_case.create(fields.into_request(), cancel).await?;
            Ok(Outcome::Found(to_json(&BranchResponse::from(&branch))?))
        }
        BranchAction::List(list) => {
            let page = use_case.get_page(&list.to_page_request(), cancel).await?;
            Ok(Outcome::Found(to_json(&PageResponse::from_page(
                &page,
                BranchResponse::from,
            ))?))
        }
        BranchAction::Get { id } => match use_case.get_by_id(id, cancel).await? {
            Some(details) => Ok(Outcome::Found(to_json(&BranchResponse::from(&details))?)),
            None => Ok(not_found("branch", id)),
        },
        BranchAction::Update { id, fields } => {
            if !use_case.update(id, fields.into_request(), cancel).await? {
                return Ok(not_found("branch", id));
            }
            match use_case.get_by_id(id, cancel).await? {
                Some(details) => Ok(Outcome::Found(to_json(&BranchResponse::from(&details))?)),
                None => Ok(not_found("branch", id)),
            }
        }
        BranchAction::Delete { id } => {
            if use_case.delete(id, cancel).await? {
                Ok(deleted("branch", id))
            } else {
                Ok(not_found("branch", id))
            }
        }
    }
}

async fn yard(
    action: YardAction,
    use_case: &YardUseCase<InMemoryYardRepository>,
    cancel: &CancelSignal,
) -> Result<Outcome> {
    match action {
        YardAction::Create { fields, branch_id } => {
            let yard = use_case
                .create(fields.into_request(branch_id), cancel)
                .await?;
            Ok(Outcome::Found(to_json(&YardResponse::from(&yard))?))
        }
        YardAction::List(list) => {
            let page = use_case.get_page(&list.to_page_request(), cancel).await?;
            Ok(Outcome::Found(to_json(&PageResponse::from_page(
                &page,
                YardResponse::from,
            ))?))
        }
        YardAction::Get { id } => match use_case.get_by_id(id, cancel).await? {
            Some(details) => Ok(Outcome::Found(to_json(&YardResponse::from(&details))?)),
            None => Ok(not_found("yard", id)),
        },
        YardAction::Update { id, fields } => {
            // The owning branch is fixed; the stored one is passed back unchanged.
            let Some(current) = use_case.get_by_id(id, cancel).await? else {
                return Ok(not_found("yard", id));
            };
            let request = YardRequest::new(fields.name, fields.capacity, current.yard.branch_id());
            if !use_case.update(id, request, cancel).await? {
                return Ok(not_found("yard", id));
            }
            match use_case.get_by_id(id, cancel).await? {
                Some(details) => Ok(Outcome::Found(to_json(&YardResponse::from(&details))?)),
                None => Ok(not_found("yard", id)),
            }
        }
        YardAction::Delete { id } => {
            if use_case.delete(id, cancel).await? {
                Ok(deleted("yard", id))
            } else {
                Ok(not_found("yard", id))
            }
        }
    }
}

async fn vehicle(
    action: VehicleAction,
    use_case: &VehicleUseCase<InMemoryVehicleRepository>,
    cancel: &CancelSignal,
) -> Result<Outcome> {
    match action {
        VehicleAction::Create(fields) => {
            let created = use_case.create(fields.into_request(), cancel).await?;
            match use_case.get_by_id(created.id(), cancel).await? {
                Some(details) => Ok(Outcome::Found(to_json(&VehicleResponse::from(&details))?)),
                None => Ok(Outcome::Found(to_json(&VehicleResponse::from(&created))?)),
            }
        }
        VehicleAction::List(list) => {
            let page = use_case.get_page(&list.to_page_request(), cancel).await?;
            Ok(Outcome::Found(to_json(&PageResponse::from_page(
                &page,
                VehicleResponse::from,
            ))?))
        }
        VehicleAction::Get { id } => match use_case.get_by_id(id, cancel).await? {
            Some(details) => Ok(Outcome::Found(to_json(&VehicleResponse::from(&details))?)),
            None => Ok(not_found("vehicle", id)),
        },
        VehicleAction::Update { id, fields } => {
            if !use_case.update(id, fields.into_request(), cancel).await? {
                return Ok(not_found("vehicle", id));
            }
            match use_case.get_by_id(id, cancel).await? {
                Some(details) => Ok(Outcome::Found(to_json(&VehicleResponse::from(&details))?)),
                None => Ok(not_found("vehicle", id)),
            }
        }
        VehicleAction::Delete { id } => {
            if use_case.delete(id, cancel).await? {
                Ok(deleted("vehicle", id))
            } else {
                Ok(not_found("vehicle", id))
            }
        }
    }
}
