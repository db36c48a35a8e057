mod args;

use catalog_core::{
    application::create_service,
    domain::{
        category::{ports::CategoryQueryService, value_objects::CategoryFilter},
        common::CatalogConfig,
        product::{ports::ProductQueryService, value_objects::ProductFilter},
    },
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command, LogArgs};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    let service = create_service(CatalogConfig::from(&args)).await?;
    let output = run(&service, args.command).await?;

    println!("{output}");

    Ok(())
}

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn run<S>(service: &S, command: Command) -> Result<String, anyhow::Error>
where
    S: CategoryQueryService + ProductQueryService,
{
    let output = match command {
        Command::Categories(filter) => {
            let page = CategoryQueryService::filter(service, CategoryFilter::from(filter)).await?;
            info!(total_elements = page.total_elements, "Categories filtered");
            serde_json::to_string_pretty(&page)?
        }
        Command::Category { id } => {
            let category = CategoryQueryService::find_by_id(service, id).await?;
            serde_json::to_string_pretty(&category)?
        }
        Command::Products(filter) => {
            let page = ProductQueryService::filter(service, ProductFilter::from(filter)).await?;
            info!(total_elements = page.total_elements, "Products filtered");
            serde_json::to_string_pretty(&page)?
        }
        Command::Product { id } => {
            let product = ProductQueryService::find_by_id(service, id).await?;
            serde_json::to_string_pretty(&product)?
        }
    };

    Ok(output)
}
