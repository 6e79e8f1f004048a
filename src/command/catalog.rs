use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use metadata_client::models::{
    Addressable, Command, Device, DeviceManager, DeviceProfile, DeviceService, ProvisionWatcher,
    Schedule, ScheduleEvent,
};
use metadata_client::{Resource, ResourceKind};

pub enum CatalogAction {
    List,
    Get(String),
    GetByName(String),
    Add(PathBuf),
    Update(PathBuf),
    Delete(String),
    DeleteByName(String),
}

pub fn run(resource: ResourceKind, action: CatalogAction) -> Result<()> {
    match resource {
        ResourceKind::Addressable => run_for::<Addressable>(action),
        ResourceKind::Command => run_for::<Command>(action),
        ResourceKind::Device => run_for::<Device>(action),
        ResourceKind::DeviceManager => run_for::<DeviceManager>(action),
        ResourceKind::DeviceProfile => run_for::<DeviceProfile>(action),
        ResourceKind::DeviceService => run_for::<DeviceService>(action),
        ResourceKind::ProvisionWatcher => run_for::<ProvisionWatcher>(action),
        ResourceKind::Schedule => run_for::<Schedule>(action),
        ResourceKind::ScheduleEvent => run_for::<ScheduleEvent>(action),
    }
}

fn run_for<T: Resource>(action: CatalogAction) -> Result<()> {
    let client = super::connect::<T>()?;
    match action {
        CatalogAction::List => print_json(&client.list()?),
        CatalogAction::Get(id) => print_json(&client.get(&id)?),
        CatalogAction::GetByName(name) => print_json(&client.get_by_name(&name)?),
        CatalogAction::Add(path) => {
            let entity: T = read_entity(&path)?;
            println!("{}", client.add(&entity)?);
            Ok(())
        }
        CatalogAction::Update(path) => {
            let entity: T = read_entity(&path)?;
            println!("{}", client.update(&entity)?);
            Ok(())
        }
        CatalogAction::Delete(id) => {
            println!("{}", client.delete(&id)?);
            Ok(())
        }
        CatalogAction::DeleteByName(name) => {
            println!("{}", client.delete_by_name(&name)?);
            Ok(())
        }
    }
}

fn read_entity<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid entity in {}", path.display()))
}

fn print_json<S: Serialize>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
