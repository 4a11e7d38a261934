mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::HolocronConfig;
use crate::graphql::{HolocronSchema, build_schema};
use crate::storage::Database;
use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: HolocronConfig,
    pub runtime: Runtime,
}

impl CommandContext {
    pub fn new(config: HolocronConfig) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to start async runtime")?;
        Ok(Self { config, runtime })
    }

    /// Connects to the configured database and builds the schema on top.
    pub fn schema(&self) -> Result<HolocronSchema> {
        let settings = &self.config.database;
        let db = self
            .runtime
            .block_on(Database::connect(settings))
            .with_context(|| format!("Failed to open database at {}", settings.url))?;
        Ok(build_schema(&db))
    }

    /// Runs one GraphQL request in-process and prints the JSON response.
    fn execute(&self, source: &str, variables: Option<String>) -> Result<()> {
        let schema = self.schema()?;

        let vars: async_graphql::Variables = match variables {
            Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
            None => async_graphql::Variables::default(),
        };

        let request = async_graphql::Request::new(source).variables(vars);
        let response = self.runtime.block_on(schema.execute(request));

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
