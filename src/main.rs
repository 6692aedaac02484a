use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use signalgen_rs::error::{SignalError, SignalResult};
use signalgen_rs::modulation::Modulation;
use signalgen_rs::phy::{BitSequence, ScrambleKind, Scheme};
use signalgen_rs::pipeline::{self, InputSource, PipelineConfig};
use signalgen_rs::ui::{self, prompt};
use signalgen_rs::utils::consts::{DEFAULT_BITS_PER_SAMPLE, MAX_INPUT_LEN};
use signalgen_rs::utils::dump::{write_json, write_levels_to_txt};
use signalgen_rs::utils::io::{parse_samples, read_samples_from_txt, read_wav};
use signalgen_rs::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Line coding, scrambling and modulation of bit streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// nrz-l, nrz-i, manchester, diff-manchester or ami
    #[arg(short, long, global = true, default_value = "nrz-l")]
    scheme: Scheme,
    /// none, b8zs or hdb3 (AMI only)
    #[arg(long, global = true, default_value = "none")]
    scramble: ScrambleKind,
    /// Maximum number of bits entering the line coder
    #[arg(long, global = true, default_value_t = MAX_INPUT_LEN)]
    max_len: usize,
    /// Write the full report as JSON
    #[arg(long, global = true)]
    json: Option<PathBuf>,
    /// Write the signal levels, one per line
    #[arg(long, global = true)]
    levels: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bit string such as 0110100
    Digital { bits: String },
    /// Quantize analog samples with PCM
    Pcm {
        #[command(flatten)]
        samples: SampleArgs,
        #[arg(short, long, default_value_t = DEFAULT_BITS_PER_SAMPLE)]
        bits_per_sample: u32,
    },
    /// Quantize analog samples with delta modulation
    Delta {
        #[command(flatten)]
        samples: SampleArgs,
    },
    /// Encode uniformly random bits
    Random {
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Menu-driven session
    Interactive,
}

#[derive(Args)]
struct SampleArgs {
    /// Sample values, separated by spaces or commas
    #[arg(allow_negative_numbers = true, conflicts_with_all = ["file", "wav"])]
    values: Vec<String>,
    /// Text file with sample values
    #[arg(short, long, conflicts_with = "wav")]
    file: Option<PathBuf>,
    /// WAV file (first channel)
    #[arg(short, long)]
    wav: Option<PathBuf>,
}

impl SampleArgs {
    fn load(&self) -> SignalResult<Vec<f64>> {
        match (&self.file, &self.wav) {
            (Some(path), _) => read_samples_from_txt(path),
            (_, Some(path)) => read_wav(path),
            _ => parse_samples(&self.values.join(" ")),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> SignalResult<()> {
    let config = PipelineConfig::new(cli.scheme, cli.scramble).with_max_len(cli.max_len);

    let (config, input) = match cli.command {
        Commands::Digital { bits } => (config, InputSource::Digital(bits.parse()?)),
        Commands::Pcm {
            samples,
            bits_per_sample,
        } => (
            config,
            InputSource::Analog {
                samples: samples.load()?,
                modulation: Modulation::Pcm { bits_per_sample },
            },
        ),
        Commands::Delta { samples } => (
            config,
            InputSource::Analog {
                samples: samples.load()?,
                modulation: Modulation::Delta,
            },
        ),
        Commands::Random { count, seed } => {
            // Checked here so a huge count is never generated
            if count > cli.max_len {
                return Err(SignalError::CapacityExceeded {
                    len: count,
                    max: cli.max_len,
                });
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            (config, InputSource::Digital(BitSequence::random(&mut rng, count)))
        }
        Commands::Interactive => {
            ui::print_banner();
            let selection = prompt::ask_selection(cli.max_len)?;
            (selection.config, selection.input)
        }
    };

    let report = pipeline::run(&config, input)?;
    ui::print_report(&report);

    if let Some(path) = &cli.json {
        write_json(&report, path)?;
        tracing::info!("Report written to {}", path.display());
    }
    if let Some(path) = &cli.levels {
        write_levels_to_txt(&report.result.levels, path)?;
        tracing::info!("Levels written to {}", path.display());
    }

    Ok(())
}
