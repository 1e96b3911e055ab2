use anyhow::{Context, Result};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Conecta ao MongoDB. O nome do banco vem do path da URI
    /// (`mongodb://host/banco`) ou de `fallback_db` quando ausente.
    pub async fn new(uri: &str, fallback_db: &str) -> Result<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .context("failed to parse MongoDB URI")?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| fallback_db.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names()
            .await
            .with_context(|| format!("failed to reach MongoDB database '{}'", db_name))?;

        log::info!("📊 Using database: {}", db_name);

        Ok(Self { client, db })
    }

    /// Índice (não único) em `name` para as buscas pontuais
    pub async fn ensure_indexes(&self, users_collection: &str) {
        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<Document>(users_collection);
        let name_index = IndexModel::builder().keys(doc! { "name": 1 }).build();

        match users.create_index(name_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(name)", users_collection),
            Err(e) => log::warn!("   ⚠️  Could not create index {}(name): {}", users_collection, e),
        }
    }

    /// Ping usado pelo health check
    pub async fn ping(&self) -> bool {
        self.db.run_command(doc! { "ping": 1 }).await.is_ok()
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Encerra o client (chamado após o servidor HTTP parar)
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
