use std::convert::Infallible;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`ProfilerConfig::from_env`].
pub const PRESET_ENV: &str = "PPC_PERF";

/// Named bundle of counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Wall and CPU clocks only.
    #[default]
    None,
    /// Cycles, instructions, branches and branch misses.
    Default,
    /// Instructions, last level and L1 read references/misses, page faults.
    Cache,
    /// Unknown preset name, selects no counters.
    Unrecognized(String),
}

impl FromStr for Preset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let preset = match s {
            "" => Preset::None,
            "default" => Preset::Default,
            "cache" => Preset::Cache,
            other => Preset::Unrecognized(other.to_string()),
        };
        Ok(preset)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::None => Ok(()),
            Preset::Default => f.write_str("default"),
            Preset::Cache => f.write_str("cache"),
            Preset::Unrecognized(name) => f.write_str(name),
        }
    }
}

/// Profiler settings, built by the harness and handed to
/// [`Profiler::new`][super::Profiler::new].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilerConfig {
    pub preset: Preset,

    /// Prepended to every metric name by [`Profiler::print_to`][super::Profiler::print_to].
    pub prefix: String,
}

impl ProfilerConfig {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Reads the preset from [`PRESET_ENV`]. Unset or non-unicode values
    /// select no counters.
    pub fn from_env() -> Self {
        let preset = env::var(PRESET_ENV).unwrap_or_default();
        Self::new(preset.parse().unwrap_or_default())
    }
}
