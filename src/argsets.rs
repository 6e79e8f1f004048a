use std::path::PathBuf;

use metadata_client::ResourceKind;

pub struct ResourceArgs {
    pub resource: ResourceKind,
}

/// A resource and the id or name to act on.
pub struct LookupArgs {
    pub resource: ResourceKind,
    pub key: String,
}

pub struct EntityFileArgs {
    pub resource: ResourceKind,
    pub path: PathBuf,
}
