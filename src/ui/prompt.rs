// Interactive menu: the same choices as the command line, asked in order

use dialoguer::{Confirm, Input, Select};

use crate::error::SignalResult;
use crate::modulation::Modulation;
use crate::phy::{BitSequence, ScrambleKind, Scheme};
use crate::pipeline::{InputSource, PipelineConfig};
use crate::utils::consts::DEFAULT_BITS_PER_SAMPLE;
use crate::utils::io::parse_samples;

pub struct Selection {
    pub config: PipelineConfig,
    pub input: InputSource,
}

pub fn ask_selection(max_len: usize) -> SignalResult<Selection> {
    let input = ask_input()?;
    let scheme = ask_scheme()?;
    let scramble = if scheme == Scheme::Ami {
        ask_scramble()?
    } else {
        ScrambleKind::None
    };

    Ok(Selection {
        config: PipelineConfig::new(scheme, scramble).with_max_len(max_len),
        input,
    })
}

fn ask_input() -> SignalResult<InputSource> {
    let input_type = Select::new()
        .with_prompt("Input")
        .items(&["Digital Input", "Analog Input (PCM/DM)"])
        .default(0)
        .interact()?;

    if input_type == 0 {
        let text: String = Input::new()
            .with_prompt("Enter binary data")
            .validate_with(|text: &String| {
                text.parse::<BitSequence>()
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            })
            .interact_text()?;
        return Ok(InputSource::Digital(text.parse()?));
    }

    let modulation_code = Select::new()
        .with_prompt("Modulation")
        .items(&["PCM", "Delta Modulation"])
        .default(0)
        .interact()?;

    let text: String = Input::new()
        .with_prompt("Enter values")
        .validate_with(|text: &String| {
            parse_samples(text).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    let samples = parse_samples(&text)?;

    let bits_per_sample = if modulation_code == 0 {
        Input::<u32>::new()
            .with_prompt("Bits per sample")
            .default(DEFAULT_BITS_PER_SAMPLE)
            .interact_text()?
    } else {
        DEFAULT_BITS_PER_SAMPLE
    };

    let modulation = Modulation::from_code(modulation_code as u32 + 1, bits_per_sample)?;
    Ok(InputSource::Analog {
        samples,
        modulation,
    })
}

fn ask_scheme() -> SignalResult<Scheme> {
    let names: Vec<&str> = Scheme::ALL.iter().map(|scheme| scheme.name()).collect();
    let choice = Select::new()
        .with_prompt("Encoding Schemes")
        .items(&names)
        .default(0)
        .interact()?;
    Scheme::from_code(choice as u32 + 1)
}

fn ask_scramble() -> SignalResult<ScrambleKind> {
    let apply = Confirm::new()
        .with_prompt("Apply Scrambling?")
        .default(false)
        .interact()?;
    if !apply {
        return Ok(ScrambleKind::None);
    }

    let choice = Select::new()
        .with_prompt("Scrambling")
        .items(&["B8ZS", "HDB3"])
        .default(0)
        .interact()?;
    ScrambleKind::from_code(choice as u32 + 1)
}
