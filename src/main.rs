use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_pick::config::DEFAULT_OUTPUT_FILE;
use weighted_pick::{load_yaml, read_text, sample, write_yaml};

const BANNER: &str = "Flags are (yaml <filename.yaml>, num <number>) or (toyaml <filename.txt>)";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file containing weighted items
    #[arg(long)]
    yaml: Option<String>,

    /// Number of items to generate
    #[arg(long, default_value_t = 5)]
    num: usize,

    /// Text file to convert into a YAML item list
    #[arg(long)]
    toyaml: Option<String>,

    /// Where to write the converted YAML
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Seed for the random number generator (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Silence the flag helper
    #[arg(long)]
    silent: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn convert(source: &str, output: &str) -> weighted_pick::Result<()> {
    let collection = read_text(source)?;
    write_yaml(output, &collection)?;
    log::info!(
        "Converted {} lines from {} into {}",
        collection.items.len(),
        source,
        output
    );
    Ok(())
}

fn pick(source: &str, count: usize, seed: Option<u64>) -> weighted_pick::Result<Vec<String>> {
    let collection = load_yaml(source)?;
    let seed = seed.unwrap_or_else(|| {
        chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default() as u64
    });
    log::debug!("Seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let selected = sample(&collection.items, count, &mut rng)?;
    Ok(selected.into_iter().map(|item| item.value).collect())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if !args.silent {
        println!("{}", BANNER);
    }

    if let Some(source) = &args.toyaml {
        if let Err(err) = convert(source, &args.output) {
            eprintln!("{}", err);
        }
        return;
    }

    if let Some(source) = &args.yaml {
        match pick(source, args.num, args.seed) {
            Ok(values) => {
                for value in values {
                    println!("{}", value);
                }
            }
            Err(err) => eprintln!("{}", err),
        }
    }
}
