use chain_gen_core::io::read_corpus;
use chain_gen_core::{
	ChainGenError, GenerationConfig, GenerationOptions, TransitionMap, generate_text_from_map,
};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process;

/// Generates pseudo-random text that mimics the word sequences of a corpus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Text file used as corpus.
	corpus: PathBuf,

	/// JSON file with `chunk_size`, `target_length` and `words_per_line`.
	/// Flags below override its values.
	#[arg(long)]
	config: Option<PathBuf>,

	/// Number of tokens looked ahead per transition.
	#[arg(short, long)]
	chunk_size: Option<usize>,

	/// Number of chunks to generate.
	#[arg(short, long)]
	num_chunks: Option<usize>,

	/// Tokens per output line, 0 or negative for a single line.
	#[arg(short, long, allow_negative_numbers = true)]
	words_per_line: Option<i64>,

	/// Seed of the random generator, for reproducible output.
	#[arg(short, long)]
	seed: Option<u64>,

	/// Print the walk as is, without sentence trimming and enclosure stripping.
	#[arg(long, default_value_t = false)]
	raw: bool,

	/// Print transition map statistics to stderr before generating.
	#[arg(long, default_value_t = false)]
	stats: bool,
}

impl Cli {
	/// Loads `--config` if given, then applies the flags on top of it.
	fn generation_config(&self) -> Result<GenerationConfig, ChainGenError> {
		let mut config = match &self.config {
			Some(path) => GenerationConfig::load(path)?,
			None => GenerationConfig::default(),
		};

		if let Some(chunk_size) = self.chunk_size {
			config.chunk_size = chunk_size;
		}
		if let Some(num_chunks) = self.num_chunks {
			config.target_length = num_chunks;
		}
		if let Some(words_per_line) = self.words_per_line {
			config.words_per_line = words_per_line;
		}
		Ok(config)
	}
}

/// Prints a summary of the map and the most frequent successors of its
/// busiest word.
fn print_stats(map: &TransitionMap) {
	let stats = map.stats();
	eprintln!("==== Transition map ====");
	eprintln!("-> tokens: {}", stats.token_count);
	eprintln!("-> chunk size: {}", stats.chunk_size);
	eprintln!("-> keys: {}", stats.keys);
	eprintln!("-> transitions: {}", stats.transitions);
	eprintln!("-> occurrences: {}", stats.occurrences);
	eprintln!("-> capitalized keys: {}", map.capitalized_keys().count());

	if let Some((word, frequency)) = &stats.busiest_key {
		eprintln!("-> busiest key: `{}` ({})", word, frequency);
		if let Some(state) = map.get(word) {
			for (chunk, count) in state.top_chunks(5) {
				eprintln!("  -> {}: {}", chunk, count);
			}
		}
	}
	eprintln!("========================");
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
	if !cli.corpus.is_file() {
		return Err(format!("Invalid corpus path: {}", cli.corpus.display()).into());
	}

	let config = cli.generation_config()?;
	if config.target_length < 1 {
		return Err("The number of chunks to generate must be positive".into());
	}
	if config.chunk_size < 1 {
		return Err("The chunk size must be positive".into());
	}

	log::info!("Reading corpus from {}", cli.corpus.display());
	let corpus = read_corpus(&cli.corpus)?;

	let map = TransitionMap::from_text(&corpus, config.chunk_size)?;
	if cli.stats {
		print_stats(&map);
	}

	let options = GenerationOptions { cleanup: !cli.raw };
	let text = match cli.seed {
		Some(seed) => {
			log::debug!("Using seed {}", seed);
			generate_text_from_map(&map, &config, options, &mut StdRng::seed_from_u64(seed))?
		}
		None => generate_text_from_map(&map, &config, options, &mut rand::rng())?,
	};

	Ok(text)
}

fn main() {
	env_logger::init();

	let cli = Cli::parse();

	match run(&cli) {
		Ok(text) => println!("{}", text),
		Err(e) => {
			match e.downcast_ref::<ChainGenError>() {
				Some(ChainGenError::NoCapitalizedSeed) => {
					eprintln!("{}. The corpus needs at least one capitalized word.", e)
				}
				Some(ChainGenError::InsufficientCorpus { .. }) => {
					eprintln!("{}. Use a longer corpus or a smaller --chunk-size.", e)
				}
				_ => eprintln!("{}", e),
			}
			process::exit(1);
		}
	}
}
