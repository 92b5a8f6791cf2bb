use crate::errors::ServerError;
use crate::graphql::Client;
use crate::introspection;

use super::{Config, SchemaConfigured};

pub(super) struct Configuring {
    pub(super) config: Config,
    pub(super) client: Client,
}

impl Configuring {
    pub(super) async fn introspect(self) -> Result<SchemaConfigured, ServerError> {
        let schema = introspection::introspect(&self.client).await?;
        Ok(SchemaConfigured {
            config: self.config,
            client: self.client,
            schema,
        })
    }
}
