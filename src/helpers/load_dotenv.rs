use std::path::PathBuf;

/// Loads a local `.env` into the environment, if one is found.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
