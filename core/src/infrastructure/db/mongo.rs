use mongodb::{Client, Database, bson::doc};
use tracing::info;

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct Mongo {
    db: Database,
}

impl Mongo {
    pub async fn new(config: MongoConfig) -> Result<Self, anyhow::Error> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 }).await?;
        info!(database = %config.database, "Connected to MongoDB");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> Database {
        self.db.clone()
    }
}
