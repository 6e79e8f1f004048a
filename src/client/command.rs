use super::{Resource, ResourceClient, ResourceKind};
use crate::error::ClientError;
use crate::interfaces::HttpTransport;
use crate::models::Command;

impl Resource for Command {
    const KIND: ResourceKind = ResourceKind::Command;

    // Command names are only unique within a profile, so the service answers
    // name lookups with a list.
    fn fetch_by_name(transport: &HttpTransport, name: &str) -> Result<Self, ClientError> {
        let commands: Vec<Command> = transport.get(&["name", name])?;
        commands
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("no command named {name}")))
    }
}

impl ResourceClient<Command> {
    /// Every command called `name`, across all profiles; empty when none.
    pub fn list_by_name(&self, name: &str) -> Result<Vec<Command>, ClientError> {
        self.list_by(&["name", name])
    }
}
