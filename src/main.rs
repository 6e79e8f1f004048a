mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use metadata_client::constants::{defaults, envvars};
use metadata_client::helpers::load_dotenv;

use command::CatalogAction;

const CMD_LIST: &str = "list";
const CMD_GET: &str = "get";
const CMD_GET_BY_NAME: &str = "get-by-name";
const CMD_ADD: &str = "add";
const CMD_UPDATE: &str = "update";
const CMD_DELETE: &str = "delete";
const CMD_DELETE_BY_NAME: &str = "delete-by-name";
const CMD_MARK_CONNECTED: &str = "mark-connected";
const CMD_RESOLVE: &str = "resolve";

fn main() -> Result<()> {
    let dotenv_path = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_LIST) => command::run(args.free_from_str()?, CatalogAction::List),
        Some(CMD_GET) => lookup(&mut args, CatalogAction::Get),
        Some(CMD_GET_BY_NAME) => lookup(&mut args, CatalogAction::GetByName),
        Some(CMD_ADD) => entity_file(&mut args, CatalogAction::Add),
        Some(CMD_UPDATE) => entity_file(&mut args, CatalogAction::Update),
        Some(CMD_DELETE) => lookup(&mut args, CatalogAction::Delete),
        Some(CMD_DELETE_BY_NAME) => lookup(&mut args, CatalogAction::DeleteByName),
        Some(CMD_MARK_CONNECTED) => command::mark_connected(argsets::LookupArgs {
            resource: args.free_from_str()?,
            key: args.free_from_str()?,
        }),
        Some(CMD_RESOLVE) => command::resolve(argsets::ResourceArgs {
            resource: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_LIST}', '{CMD_GET}', '{CMD_GET_BY_NAME}', '{CMD_ADD}', \
             '{CMD_UPDATE}', '{CMD_DELETE}', '{CMD_DELETE_BY_NAME}', '{CMD_MARK_CONNECTED}', '{CMD_RESOLVE}'"
        )),
    }
}

fn lookup(args: &mut pico_args::Arguments, action: fn(String) -> CatalogAction) -> Result<()> {
    let lookup = argsets::LookupArgs {
        resource: args.free_from_str()?,
        key: args.free_from_str()?,
    };
    command::run(lookup.resource, action(lookup.key))
}

fn entity_file(
    args: &mut pico_args::Arguments,
    action: fn(std::path::PathBuf) -> CatalogAction,
) -> Result<()> {
    let file = argsets::EntityFileArgs {
        resource: args.free_from_str()?,
        path: args.free_from_str()?,
    };
    command::run(file.resource, action(file.path))
}
