pub mod completions;
pub mod config;
pub mod daily;
pub mod reset;
pub mod sample;
pub mod stats;
pub mod worker;

use redbead_core::error::Result;
use redbead_core::{Config, Database, Experiment, ValidationError};
use uuid::Uuid;

pub type CommandResult = Result<()>;

/// Open the experiment stored in the configured database.
pub fn open_experiment(config: &Config) -> Result<Experiment<Database>> {
    let db = Database::open_named(&config.storage.database_file)?;
    Ok(Experiment::open(db))
}

/// Parse a worker id argument.
pub fn parse_worker_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidWorkerId {
        input: raw.to_string(),
    })
}

/// Format a float with the configured number of decimals.
pub fn fmt_float(value: f64, config: &Config) -> String {
    format!("{value:.*}", usize::from(config.display.decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_float_uses_configured_decimals() {
        let mut config = Config::default();
        assert_eq!(fmt_float(12.345, &config), "12.3");
        config.display.decimals = 0;
        assert_eq!(fmt_float(12.5, &config), "12");
        config.display.decimals = u8::MAX;
        assert_eq!(fmt_float(1.0, &config).len(), 2 + usize::from(u8::MAX));
    }

    #[test]
    fn parse_worker_id_rejects_garbage() {
        let id = Uuid::new_v4();
        assert_eq!(parse_worker_id(&format!(" {id} ")), Ok(id));
        assert!(matches!(
            parse_worker_id("not-a-uuid"),
            Err(ValidationError::InvalidWorkerId { .. })
        ));
    }
}
