//! `storefront` command-line client
//!
//! Each invocation is one page load: the cart is hydrated from the storage
//! directory, one command runs, and any change is already on disk on exit.

mod render;

use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use shop_cart::CartIntent;
use shop_catalog::{HttpCatalogClient, ProductId};
use shop_core::{nav, ProductView, Storefront, StorefrontConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let product_id = || {
        Arg::new("id")
            .required(true)
            .value_parser(value_parser!(u64))
            .help("Product id")
    };

    Command::new("storefront")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Kogtetochka store: catalog and persistent shopping cart")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("storage-dir")
                .long("storage-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the persisted cart"),
        )
        .arg(
            Arg::new("api")
                .long("api")
                .global(true)
                .help("Store backend origin, e.g. http://localhost:3000"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(Command::new("catalog").about("List products"))
        .subcommand(
            Command::new("product")
                .about("Show product details")
                .arg(product_id()),
        )
        .subcommand(
            Command::new("add")
                .about("Add one unit of a product to the cart")
                .arg(product_id()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a product from the cart")
                .arg(product_id()),
        )
        .subcommand(Command::new("clear").about("Clear shopping cart"))
        .subcommand(
            Command::new("cart").about("Show the cart").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Output as JSON"),
            ),
        )
        .subcommand(Command::new("nav").about("Show header navigation"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<StorefrontConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StorefrontConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StorefrontConfig::default(),
    };

    if let Some(dir) = matches.get_one::<PathBuf>("storage-dir") {
        config = config.with_storage_dir(dir);
    }
    if let Some(api) = matches.get_one::<String>("api") {
        config = config.with_api_base_url(api);
    }
    Ok(config)
}

fn product_id(args: &ArgMatches) -> anyhow::Result<ProductId> {
    args.get_one::<u64>("id")
        .copied()
        .map(ProductId)
        .context("missing product id")
}

async fn run(
    storefront: &mut Storefront<HttpCatalogClient>,
    matches: &ArgMatches,
) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("catalog", _)) => {
            let rows = storefront.list_catalog().await?;
            print!("{}", render::catalog(&rows));
        }
        Some(("product", args)) => {
            let id = product_id(args)?;
            match storefront.product_view(id).await {
                ProductView::Loaded(product) => {
                    print!("{}", render::product(&product, storefront.is_in_cart(id)));
                }
                ProductView::Failed { error, .. } => return Err(error.into()),
                ProductView::Loading(_) => {}
            }
        }
        Some(("add", args)) => {
            let id = product_id(args)?;
            storefront.add_product(id).await?;
            let quantity = storefront
                .state()
                .quantity(id)
                .map_or(0, std::num::NonZeroU32::get);
            println!(
                "Added product {id} (quantity {quantity}). {}",
                storefront.cart_label()
            );
        }
        Some(("remove", args)) => {
            let id = product_id(args)?;
            match storefront.dispatch(CartIntent::RemoveItem(id)) {
                Some(_) => println!("Removed product {id}. {}", storefront.cart_label()),
                None => println!("Product {id} is not in the cart."),
            }
        }
        Some(("clear", _)) => {
            storefront.dispatch(CartIntent::Clear);
            println!("{}", render::EMPTY_CART);
        }
        Some(("cart", args)) => {
            let summary = storefront.cart_summary();
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::cart(&summary));
            }
        }
        Some(("nav", _)) => {
            let brand = nav::brand_href(&storefront.config().basename);
            print!("{}", render::nav(&brand, &storefront.nav_links()));
        }
        _ => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config = load_config(&matches)?;
    tracing::debug!(?config, "configuration loaded");
    let mut storefront = Storefront::open(config).context("failed to open storefront")?;
    run(&mut storefront, &matches).await
}
