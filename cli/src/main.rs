use anyhow::Result;
use clap::{Parser, Subcommand};
use trivet_core::{ConversionArgs, NO_RESULT, RESULT_KEY};

#[derive(Parser)]
#[command(name = "trivet")]
#[command(about = "Kitchen ingredient conversion calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ingredient quantity between volume and weight units
    Convert {
        /// Ingredient name, exactly as listed by `ingredients`
        #[arg(long)]
        ingredient: String,
        /// Quantity to convert: decimal ("1.5") or fraction ("3/4")
        #[arg(long)]
        amount: String,
        /// Source unit (oz, gram, floz, cup, tsp, tbsp)
        #[arg(long)]
        from: String,
        /// Target unit
        #[arg(long)]
        to: String,
        /// Scale factor for the result, e.g. "2" to double a recipe
        #[arg(long, default_value = "1")]
        multiplier: String,
    },
    /// List supported ingredient names
    Ingredients,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            ingredient,
            amount,
            from,
            to,
            multiplier,
        } => {
            let mut response = trivet_core::handle(&ConversionArgs {
                ingredient,
                amount,
                from_unit: from,
                to_unit: to,
                multiplier,
            });
            let result = response
                .remove(RESULT_KEY)
                .unwrap_or_else(|| NO_RESULT.to_string());
            println!("{result}");
        }
        Commands::Ingredients => {
            for name in ingredient_density::ingredient_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
