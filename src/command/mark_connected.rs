use anyhow::{anyhow, Result};

use metadata_client::helpers::now_epoch_millis;
use metadata_client::models::{Device, DeviceManager, DeviceService};
use metadata_client::{ResourceKind, StatefulResource};

use crate::argsets::LookupArgs;

pub fn mark_connected(args: LookupArgs) -> Result<()> {
    let now = now_epoch_millis();
    let updated = match args.resource {
        ResourceKind::Device => touch::<Device>(&args.key, now)?,
        ResourceKind::DeviceManager => touch::<DeviceManager>(&args.key, now)?,
        ResourceKind::DeviceService => touch::<DeviceService>(&args.key, now)?,
        other => {
            return Err(anyhow!(
                "'{other}' has no connection time; use 'device', 'devicemanager' or 'deviceservice'"
            ))
        }
    };
    println!("{updated}");
    Ok(())
}

fn touch<T: StatefulResource>(name: &str, time: i64) -> Result<bool> {
    let client = super::connect::<T>()?;
    log::info!("Marking {} '{name}' connected at {time}", T::KIND);
    Ok(client.update_last_connected_by_name(name, time)?)
}
