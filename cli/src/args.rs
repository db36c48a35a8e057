use catalog_core::domain::{
    category::value_objects::{CategoryFilter, CategorySortProperty},
    common::{CatalogConfig, DatabaseConfig, criteria::SortDirection},
    product::value_objects::{ProductFilter, ProductSortProperty},
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog",
    version,
    about = "Query categories and products of the product catalog"
)]
pub struct Args {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 27017)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER")]
    pub username: Option<String>,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD")]
    pub password: Option<String>,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "product-catalog"
    )]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Filter directives, e.g. `info,catalog_core=debug`
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Filter categories
    Categories(CategoryFilterArgs),
    /// Show a single category
    Category { id: Uuid },
    /// Filter products
    Products(ProductFilterArgs),
    /// Show a single product
    Product { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategorySortArg {
    Name,
}

impl From<CategorySortArg> for CategorySortProperty {
    fn from(property: CategorySortArg) -> Self {
        match property {
            CategorySortArg::Name => CategorySortProperty::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductSortArg {
    AddedAt,
    Name,
    SalePrice,
}

impl From<ProductSortArg> for ProductSortProperty {
    fn from(property: ProductSortArg) -> Self {
        match property {
            ProductSortArg::AddedAt => ProductSortProperty::AddedAt,
            ProductSortArg::Name => ProductSortProperty::Name,
            ProductSortArg::SalePrice => ProductSortProperty::SalePrice,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    #[arg(long, default_value_t = 15)]
    pub size: u32,

    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CategoryFilterArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, value_enum)]
    pub sort_by: Option<CategorySortArg>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProductFilterArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, value_enum)]
    pub sort_by: Option<ProductSortArg>,

    #[arg(long)]
    pub enabled: Option<bool>,

    /// RFC 3339 timestamp
    #[arg(long)]
    pub added_at_from: Option<DateTime<Utc>>,

    /// RFC 3339 timestamp
    #[arg(long)]
    pub added_at_to: Option<DateTime<Utc>>,

    #[arg(long)]
    pub price_from: Option<f64>,

    #[arg(long)]
    pub price_to: Option<f64>,

    #[arg(long)]
    pub has_discount: Option<bool>,

    #[arg(long)]
    pub in_stock: Option<bool>,

    /// Category id, may be repeated
    #[arg(long = "category")]
    pub categories_id: Vec<Uuid>,

    /// Free-text search; results are ordered by relevance
    #[arg(long)]
    pub term: Option<String>,
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        DatabaseConfig {
            host: args.host,
            port: args.port,
            username: args.username,
            password: args.password,
            name: args.name,
        }
    }
}

impl From<&Args> for CatalogConfig {
    fn from(args: &Args) -> Self {
        CatalogConfig {
            database: DatabaseConfig::from(args.database.clone()),
        }
    }
}

impl From<CategoryFilterArgs> for CategoryFilter {
    fn from(args: CategoryFilterArgs) -> Self {
        CategoryFilter {
            page: args.page.page,
            size: args.page.size,
            sort_by_property: args.sort_by.map(CategorySortProperty::from),
            sort_direction: args.page.direction.map(SortDirection::from),
            name: args.name,
            enabled: args.enabled,
        }
    }
}

impl From<ProductFilterArgs> for ProductFilter {
    fn from(args: ProductFilterArgs) -> Self {
        ProductFilter {
            page: args.page.page,
            size: args.page.size,
            sort_by_property: args.sort_by.map(ProductSortProperty::from),
            sort_direction: args.page.direction.map(SortDirection::from),
            enabled: args.enabled,
            added_at_from: args.added_at_from,
            added_at_to: args.added_at_to,
            price_from: args.price_from,
            price_to: args.price_to,
            has_discount: args.has_discount,
            in_stock: args.in_stock,
            categories_id: args.categories_id,
            term: args.term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_command() {
        let args = Args::try_parse_from([
            "catalog",
            "categories",
            "--name",
            "note",
            "--enabled",
            "true",
            "--direction",
            "desc",
        ])
        .unwrap();

        let Command::Categories(filter_args) = args.command else {
            panic!("expected categories command");
        };
        let filter = CategoryFilter::from(filter_args);

        assert_eq!(filter.name.as_deref(), Some("note"));
        assert_eq!(filter.enabled, Some(true));
        assert_eq!(filter.sort_direction, Some(SortDirection::Desc));
        assert_eq!(filter.page, 0);
        assert_eq!(filter.size, 15);
    }

    #[test]
    fn test_parse_products_command() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let first_arg = first.to_string();
        let second_arg = second.to_string();

        let args = Args::try_parse_from([
            "catalog",
            "products",
            "--page",
            "2",
            "--size",
            "20",
            "--sort-by",
            "sale-price",
            "--price-from",
            "10.5",
            "--added-at-from",
            "2024-01-01T00:00:00Z",
            "--in-stock",
            "false",
            "--category",
            first_arg.as_str(),
            "--category",
            second_arg.as_str(),
            "--term",
            "notebook",
        ])
        .unwrap();

        let Command::Products(filter_args) = args.command else {
            panic!("expected products command");
        };
        let filter = ProductFilter::from(filter_args);

        assert_eq!(filter.page, 2);
        assert_eq!(filter.size, 20);
        assert_eq!(filter.sort_by_property, Some(ProductSortProperty::SalePrice));
        assert_eq!(filter.price_from, Some(10.5));
        assert_eq!(filter.price_to, None);
        assert!(filter.added_at_from.is_some());
        assert_eq!(filter.in_stock, Some(false));
        assert_eq!(filter.categories_id, vec![first, second]);
        assert_eq!(filter.term.as_deref(), Some("notebook"));
    }

    #[test]
    fn test_database_config_from_args() {
        let args = Args::try_parse_from([
            "catalog",
            "--database-host",
            "mongo",
            "--database-port",
            "27018",
            "product",
            "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        ])
        .unwrap();

        let config = CatalogConfig::from(&args);

        assert_eq!(config.database.host, "mongo");
        assert_eq!(config.database.port, 27018);
        assert_eq!(config.database.name, "product-catalog");
        assert!(matches!(args.command, Command::Product { .. }));
    }
}
