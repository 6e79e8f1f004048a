mod catalog;
mod mark_connected;

pub use catalog::{run, CatalogAction};
pub use mark_connected::mark_connected;

use anyhow::Result;
use once_cell::sync::Lazy;

use metadata_client::constants::envvars;
use metadata_client::{ClientConfig, EndpointResolver, Resource, ResourceClient};

use crate::argsets::ResourceArgs;

// Read on first use, after `.env` has been loaded.
static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_env);

fn connect<T: Resource>() -> Result<ResourceClient<T>> {
    let resolver = EndpointResolver::from_config(&CONFIG)?;
    Ok(ResourceClient::connect(&CONFIG, &resolver)?)
}

pub fn resolve(args: ResourceArgs) -> Result<()> {
    let collection = args.resource.collection();
    let resolver = EndpointResolver::from_config(&CONFIG)?;
    let url = resolver.resolve(
        &CONFIG.service_name,
        &envvars::collection_url(collection),
        &CONFIG.static_url(collection),
    )?;
    println!("{url}");
    Ok(())
}
