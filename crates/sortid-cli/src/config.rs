use anyhow::bail;
use clap::Parser;
use sortid::base32::MAX_TIME_LEN;

/// Runtime configuration for the `sortid` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is loaded first), with defaults matching the library's
/// default identifier layout.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sortid",
    version,
    about = "Generate lexicographically sortable identifiers"
)]
pub struct CliArgs {
    /// Number of identifiers to print, one per line.
    ///
    /// Environment variable: `SORTID_COUNT`
    #[arg(short = 'n', long, env = "SORTID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Fixed timestamp in seconds since the Unix epoch (fractional part is
    /// milliseconds). The system clock is used when absent.
    ///
    /// Environment variable: `SORTID_TIME`
    #[arg(short, long, env = "SORTID_TIME")]
    pub time: Option<f64>,

    /// Width of the time segment in characters.
    ///
    /// Environment variable: `SORTID_TIME_LEN`
    #[arg(long, env = "SORTID_TIME_LEN", default_value_t = sortid::TIME_LEN)]
    pub time_len: usize,

    /// Width of the random segment in characters.
    ///
    /// Environment variable: `SORTID_RANDOM_LEN`
    #[arg(long, env = "SORTID_RANDOM_LEN", default_value_t = sortid::RANDOM_LEN)]
    pub random_len: usize,

    /// Keep identifiers strictly increasing within this run by incrementing
    /// the random segment when the millisecond repeats.
    ///
    /// Environment variable: `SORTID_MONOTONIC`
    #[arg(short, long, env = "SORTID_MONOTONIC", default_value_t = false)]
    pub monotonic: bool,

    /// Print the millisecond timestamp encoded in this identifier instead of
    /// generating new ones.
    #[arg(short, long, conflicts_with_all = ["count", "time", "monotonic"])]
    pub decode: Option<String>,
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Generate {
        count: usize,
        time: Option<f64>,
        monotonic: bool,
    },
    Decode {
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    pub mode: Mode,
    pub time_len: usize,
    pub random_len: usize,
}

impl TryFrom<CliArgs> for GenConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.time_len == 0 || args.time_len > MAX_TIME_LEN {
            bail!(
                "SORTID_TIME_LEN ({}) must be between 1 and {MAX_TIME_LEN}",
                args.time_len
            );
        }

        let mode = if let Some(id) = args.decode {
            Mode::Decode { id }
        } else {
            if args.count == 0 {
                bail!("SORTID_COUNT must be greater than 0");
            }
            if args.random_len == 0 {
                bail!("SORTID_RANDOM_LEN must be greater than 0");
            }
            if let Some(time) = args.time {
                if !(time.is_finite() && time >= 0.0) {
                    bail!("SORTID_TIME ({time}) must be a non-negative number of seconds");
                }
            }
            Mode::Generate {
                count: args.count,
                time: args.time,
                monotonic: args.monotonic,
            }
        };

        Ok(Self {
            mode,
            time_len: args.time_len,
            random_len: args.random_len,
        })
    }
}
