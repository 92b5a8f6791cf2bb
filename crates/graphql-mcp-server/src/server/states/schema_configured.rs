use crate::graphql::Client;
use crate::introspection::SchemaSnapshot;
use crate::tools::execute::Execute;

use super::{Config, Starting};

pub(super) struct SchemaConfigured {
    pub(super) config: Config,
    pub(super) client: Client,
    pub(super) schema: SchemaSnapshot,
}

impl SchemaConfigured {
    pub(super) fn build_tools(self) -> Starting {
        Starting {
            config: self.config,
            client: self.client,
            schema: self.schema,
            execute_tool: Execute::new(),
        }
    }
}
