use hexlife::Topology;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid flag values, reported before any simulation runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value for --{flag}: {value:?}")]
    Invalid { flag: &'static str, value: String },
    #[error("--{flag} must be at least 1")]
    NotPositive { flag: &'static str },
    #[error("probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("-{a} and -{b} select different neighbor rules")]
    ConflictingRules { a: &'static str, b: &'static str },
}

pub struct Args {
    matches: getopts::Matches,
}

/// The original surface spells its multi-character flags with a single
/// dash, which getopts would reject as short-option clusters.
fn respell(arg: &str) -> &str {
    match arg {
        "-size" => "--size",
        "-12" => "--12",
        "-nc" => "--no-clear",
        _ => arg,
    }
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ConfigError> {
        let mut opts = getopts::Options::new();
        opts.optflag("6", "", "use 6 neighbor rules on a hex grid (default)");
        opts.optflag("8", "", "use 8 neighbor rules on a square grid");
        opts.optflag("", "12", "use 12 neighbor rules on a hex grid");
        opts.optopt("f", "file", "read the initial board from FILE", "FILE");
        opts.optopt("s", "size", "grid size for random boards", "N");
        opts.optopt("i", "prob", "probability a random cell starts alive", "P");
        opts.optopt("g", "gens", "number of generations to simulate", "N");
        opts.optopt("p", "print-every", "print every Nth generation", "N");
        opts.optflag(
            "n",
            "no-clear",
            "print every frame instead of redrawing in place",
        );
        opts.optflag("", "help", "print this help menu");

        let matches = opts.parse(args.iter().map(T::as_ref).map(respell))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: hexlife [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get_or<T: std::str::FromStr>(
        &self,
        flag: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match self.matches.opt_get(flag) {
            Ok(value) => Ok(value.unwrap_or(default)),
            Err(_) => Err(ConfigError::Invalid {
                flag,
                value: self.matches.opt_str(flag).unwrap_or_default(),
            }),
        }
    }

    pub fn topology(&self) -> Result<Topology, ConfigError> {
        let flags = [
            ("6", Topology::Hex6),
            ("8", Topology::Square8),
            ("12", Topology::Hex12),
        ];
        let mut picked: Option<(&'static str, Topology)> = None;
        for (flag, topology) in flags {
            if !self.matches.opt_present(flag) {
                continue;
            }
            if let Some((other, _)) = picked {
                return Err(ConfigError::ConflictingRules { a: other, b: flag });
            }
            picked = Some((flag, topology));
        }
        Ok(picked.map(|(_, topology)| topology).unwrap_or_default())
    }

    pub fn input_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("file").map(PathBuf::from)
    }

    pub fn size(&self) -> Result<usize, ConfigError> {
        let size = self.get_or("size", 100)?;
        if size == 0 {
            return Err(ConfigError::NotPositive { flag: "size" });
        }
        Ok(size)
    }

    pub fn probability(&self) -> Result<f64, ConfigError> {
        let prob = self.get_or("prob", 0.5)?;
        if !(0.0..=1.0).contains(&prob) {
            return Err(ConfigError::Probability(prob));
        }
        Ok(prob)
    }

    pub fn generations(&self) -> Result<u64, ConfigError> {
        self.get_or("gens", 10)
    }

    pub fn print_every(&self) -> Result<u64, ConfigError> {
        let every = self.get_or("print-every", 1)?;
        if every == 0 {
            return Err(ConfigError::NotPositive { flag: "print-every" });
        }
        Ok(every)
    }

    pub fn no_clear(&self) -> bool {
        self.matches.opt_present("no-clear")
    }
}
