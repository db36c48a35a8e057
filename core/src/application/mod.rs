use crate::{
    domain::common::{CatalogConfig, services::Service},
    infrastructure::{
        category::MongoCategoryRepository,
        db::mongo::{Mongo, MongoConfig},
        product::MongoProductRepository,
    },
};

pub type CatalogService = Service<MongoCategoryRepository, MongoProductRepository>;

pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, anyhow::Error> {
    let mongo = Mongo::new(MongoConfig {
        uri: config.database.uri(),
        database: config.database.name.clone(),
    })
    .await?;

    Ok(Service::new(
        MongoCategoryRepository::new(mongo.get_db()),
        MongoProductRepository::new(mongo.get_db()),
    ))
}
