#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, GenConfig, Mode};
use sortid::{Encoder, MonoEncoder, SystemClock, ThreadRandom, decode_time_with};
use std::io::{self, BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = GenConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!("Starting with config: {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(config: &GenConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match &config.mode {
        Mode::Decode { id } => {
            let millis = decode_time_with(id, config.time_len)
                .with_context(|| format!("failed to decode time segment of {id:?}"))?;
            writeln!(out, "{millis}")?;
        }
        Mode::Generate {
            count,
            time,
            monotonic,
        } => {
            let encoder = Encoder::new(SystemClock, ThreadRandom)
                .with_lengths(config.time_len, config.random_len);
            if *monotonic {
                let encoder = MonoEncoder::from_encoder(encoder);
                for _ in 0..*count {
                    writeln!(out, "{}", encoder.new_identifier(*time)?)?;
                }
            } else {
                for _ in 0..*count {
                    writeln!(out, "{}", encoder.new_identifier(*time)?)?;
                }
            }
            tracing::debug!(count, monotonic, "generated identifiers");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(count: usize, time: Option<f64>, monotonic: bool) -> Vec<String> {
        let config = GenConfig {
            mode: Mode::Generate {
                count,
                time,
                monotonic,
            },
            time_len: 10,
            random_len: 16,
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn prints_one_identifier_per_line() {
        let ids = generate(3, None, false);
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| sortid::is_valid(id)));
    }

    #[test]
    fn fixed_time_sets_the_time_segment() {
        for id in generate(2, Some(0.001), false) {
            assert!(id.starts_with("0000000001"), "{id}");
        }
    }

    #[test]
    fn monotonic_output_is_strictly_increasing() {
        let ids = generate(50, Some(1_700_000_000.0), true);
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn decodes_time_segment() {
        let config = GenConfig {
            mode: Mode::Decode {
                id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".into(),
            },
            time_len: 10,
            random_len: 16,
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1469922850259\n");
    }

    #[test]
    fn decode_reports_bad_input() {
        let config = GenConfig {
            mode: Mode::Decode { id: "01AR!".into() },
            time_len: 10,
            random_len: 16,
        };
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("01AR!"), "{err}");
    }
}
