pub mod criteria;
pub mod entities;
pub mod pagination;
pub mod services;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: String,
}

impl DatabaseConfig {
    /// Connection string for the MongoDB driver. Credentials are only included
    /// when a username is configured, and are percent-encoded.
    pub fn uri(&self) -> String {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => format!(
                "mongodb://{}:{}@{}:{}/?authSource=admin",
                urlencoding::encode(username),
                urlencoding::encode(password),
                self.host,
                self.port
            ),
            (Some(username), None) => format!(
                "mongodb://{}@{}:{}/?authSource=admin",
                urlencoding::encode(username),
                self.host,
                self.port
            ),
            _ => format!("mongodb://{}:{}", self.host, self.port),
        }
    }
}
