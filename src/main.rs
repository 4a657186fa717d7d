use clap::Parser;
use storefront_cart::utils::logger;
use storefront_cart::{CartCommand, CartStore, CliConfig, ConsoleToast, HttpCatalog, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting storefront cart CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::from_config(&config);
    let api = HttpCatalog::from_config(&config)?;
    let mut cart = CartStore::load(storage, api, ConsoleToast).await?;

    match cli.command {
        CartCommand::Add { product_id } => cart.add(product_id).await,
        CartCommand::Remove { product_id } => cart.remove(product_id).await,
        CartCommand::Set { product_id, amount } => cart.update_amount(product_id, amount).await,
        CartCommand::Show => {}
    }

    if cart.lines().is_empty() {
        println!("🛒 Cart is empty");
    } else {
        println!("{:<8} {:<32} {:>10} {:>8}", "ID", "TITLE", "PRICE", "AMOUNT");
        for line in cart.lines() {
            println!(
                "{:<8} {:<32} {:>10.2} {:>8}",
                line.id, line.title, line.price, line.amount
            );
        }
    }

    Ok(())
}
