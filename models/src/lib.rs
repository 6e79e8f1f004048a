//! Entity types of the core-metadata catalog
//!
//! These are the records exchanged verbatim with the remote service. Field
//! names follow the service's camelCase JSON; admin and operating states are
//! sent in lower case (`locked`, `enabled`, ...).
//!
//! Every entity carries a [`BaseObject`] holding the server-assigned `id`,
//! `created` and `modified` fields. Values set locally in those fields are
//! never authoritative: re-fetch an entity after adding or updating it.

mod addressable;
mod base;
mod device;
mod profile;
mod provision;
mod schedule;
mod states;

pub use addressable::{Addressable, Protocol};
pub use base::{BaseObject, Entity};
pub use device::{Device, DeviceManager, DeviceService};
pub use profile::{Action, Command, CommandResponse, DeviceProfile};
pub use provision::ProvisionWatcher;
pub use schedule::{Schedule, ScheduleEvent};
pub use states::{AdminState, OperatingState, ParseStateError};
