use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{SignalError, SignalResult};

/// Parse whitespace- or comma-separated analog samples
pub fn parse_samples(text: &str) -> SignalResult<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| SignalError::InvalidSample(token.to_string()))
        })
        .collect()
}

/// One or more samples per line, blank lines ignored
pub fn read_samples_from_txt(path: &Path) -> SignalResult<Vec<f64>> {
    let reader = io::BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for line in reader.lines() {
        samples.extend(parse_samples(&line?)?);
    }
    Ok(samples)
}

/// Samples of a WAV file normalized to [-1, 1] (first channel only)
pub fn read_wav(path: &Path) -> SignalResult<Vec<f64>> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|sample| sample.map(f64::from))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let amplitude =
                (1i64 << spec.bits_per_sample.saturating_sub(1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|sample| sample.map(|value| value as f64 / amplitude))
                .collect::<Result<_, _>>()?
        }
    };

    Ok(samples.into_iter().step_by(channels).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        let samples = parse_samples("1.5, -2  3\n0").unwrap();
        assert_eq!(samples, vec![1.5, -2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_samples("1.0 abc"),
            Err(SignalError::InvalidSample(s)) if s == "abc"
        ));
        assert!(parse_samples("inf").is_err());
    }

    #[test]
    fn test_read_txt_and_wav() {
        let dir = std::env::temp_dir().join(format!("signalgen-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let txt = dir.join("samples.txt");
        std::fs::write(&txt, "0.5\n\n1.0 -1.0\n").unwrap();
        assert_eq!(read_samples_from_txt(&txt).unwrap(), vec![0.5, 1.0, -1.0]);

        let wav = dir.join("samples.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
        for value in [0i16, 16384, -32768] {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();
        assert_eq!(read_wav(&wav).unwrap(), vec![0.0, 0.5, -1.0]);

        std::fs::remove_dir_all(&dir).ok();
    }
}
