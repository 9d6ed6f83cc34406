use clap::Parser;
use num_format::{Locale, ToFormattedString};
use people_index::{
    pipeline::round_trip,
    sample::{bay_area::BayAreaSample, options::SampleOptions},
};

/// 🏙️ People Index, groups generated Bay Area residents by city and checks the index survives
/// a serialize / deserialize round trip
#[derive(Parser, Debug)]
struct Cli {
    /// Seed for the sample data generator, random when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Number of people generated for every listed zipcode
    #[clap(short, long, default_value = "1")]
    people_per_zipcode: usize,

    /// Number of extra people living in a zipcode no city lists
    #[clap(short, long, default_value = "0")]
    unmatched: usize,

    /// Print the serialized index on a single line
    #[clap(short, long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let seed = args.seed.unwrap_or_else(rand::random);

    log::info!("Generating sample data with seed {}", seed);

    let options = SampleOptions::default()
        .set_seed(seed)
        .set_people_per_zipcode(args.people_per_zipcode)
        .set_unmatched_people(args.unmatched);

    let mut source = BayAreaSample::new(options);

    let report = match round_trip(&mut source) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Could not load the serialized index: {}", err);
            return Err(err.into());
        }
    };

    let serialized = match args.compact {
        true => serde_json::to_string(&report.serialized)?,
        false => serde_json::to_string_pretty(&report.serialized)?,
    };

    println!("{} SERIALIZED {}", "=".repeat(25), "=".repeat(25));
    println!("{}", serialized);

    println!("\n{} DE-SERIALIZED {}", "=".repeat(25), "=".repeat(25));
    println!("{}", report.deserialized);

    println!("\n\nDeserialized Equals Original:  {}", report.is_equal());

    log::info!(
        "Round tripped {} memberships from {} people",
        report
            .original
            .membership_count()
            .to_formatted_string(&Locale::en),
        report.people_count.to_formatted_string(&Locale::en)
    );

    anyhow::ensure!(
        report.is_equal(),
        "Deserialized index does not equal the original"
    );

    Ok(())
}
