use clap::{Parser, Subcommand};
use shopfront_cli::{commands, commands::CheckoutRequest, CliPayment};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// API base URL (overrides SHOPFRONT_API_URL and the default)
    #[arg(long, global = true)]
    api: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the product catalog
    Catalog,
    /// Run a scripted checkout and print the receipt
    Order {
        #[arg(short, long = "item", required = true, help = "Product id; repeat per item")]
        items: Vec<String>,
        #[arg(long, value_enum)]
        payment: CliPayment,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let api_base = cli.api.unwrap_or_else(shopfront_config::api_base);

    match cli.command {
        Commands::Catalog => {
            commands::cmd_catalog(&api_base).await?;
        }
        Commands::Order {
            items,
            payment,
            email,
            phone,
            address,
        } => {
            commands::cmd_order(
                &api_base,
                CheckoutRequest {
                    items,
                    payment: payment.into(),
                    email,
                    phone,
                    address,
                },
            )
            .await?;
        }
    }

    Ok(())
}
