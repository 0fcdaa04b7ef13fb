//! Configuration for the binconv command-line tool.
//!
//! Handles parsing command-line arguments and filling in defaults. Every
//! default is printable (`--print-config`) so a run can be repeated exactly.

use std::path::PathBuf;

use binconv_core::Delimiter;

/// Which direction to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw bytes in, binary text out
    Encode,
    /// Binary text in, raw bytes (or group list) out
    Decode,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // === Files ===
    /// Input file path (None = stdin, or a generated sample)
    pub input_file: Option<PathBuf>,

    /// Output file path (None = stdout)
    pub output_file: Option<PathBuf>,

    // === Format ===
    /// Separator between groups
    pub delimiter: Delimiter,

    /// Encoder padding / decoder byte length
    pub width: usize,

    /// Print decoded groups (NaN included) instead of failing on them
    pub lenient: bool,

    // === Sample input ===
    /// Generate this many bytes instead of reading input (encode only)
    pub sample_bytes: Option<usize>,

    /// Seed for sample generation
    pub seed: u64,

    // === Behavior ===
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// The first argument must be `encode` or `decode`.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mode = match args.first().map(String::as_str) {
            Some("encode") => Mode::Encode,
            Some("decode") => Mode::Decode,
            Some("--help") | Some("-h") => {
                print_help();
                std::process::exit(0);
            }
            Some(other) => return Err(format!("unknown command: {}", other)),
            None => return Err("missing command: expected `encode` or `decode`".to_string()),
        };

        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut delimiter = Delimiter::default();
        let mut width: Option<usize> = None;
        let mut lenient = false;
        let mut sample_bytes: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut log_level: Option<String> = None;
        let mut print_config = false;
        let mut print_stats = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    input_file = Some(PathBuf::from(value(args, &mut i, "a path")?));
                }
                "--out" => {
                    output_file = Some(PathBuf::from(value(args, &mut i, "a path")?));
                }
                "--delim" => {
                    let name = value(args, &mut i, "a delimiter name")?;
                    delimiter = Delimiter::from_name(name).map_err(|e| e.to_string())?;
                }
                "--width" => {
                    let raw = value(args, &mut i, "a number")?;
                    width = Some(raw.parse().map_err(|_| format!("invalid width: {}", raw))?);
                }
                "--lenient" => {
                    lenient = true;
                }
                "--sample" => {
                    let raw = value(args, &mut i, "a number")?;
                    sample_bytes = Some(raw.parse().map_err(|_| format!("invalid sample size: {}", raw))?);
                }
                "--seed" => {
                    let raw = value(args, &mut i, "a number")?;
                    seed = Some(raw.parse().map_err(|_| format!("invalid seed: {}", raw))?);
                }
                "--log-level" => {
                    log_level = Some(value(args, &mut i, "a level")?.to_string());
                }
                "--print-config" => {
                    print_config = true;
                }
                "--stats" => {
                    print_stats = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    return Err(format!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        if sample_bytes.is_some() && mode == Mode::Decode {
            return Err("--sample only applies to encode".to_string());
        }
        if sample_bytes.is_some() && input_file.is_some() {
            return Err("--sample and --in are mutually exclusive".to_string());
        }
        if lenient && mode == Mode::Encode {
            return Err("--lenient only applies to decode".to_string());
        }

        let width = width.unwrap_or(binconv_core::encoder::DEFAULT_PADDING);
        if width == 0 && mode == Mode::Decode {
            return Err("Byte length must be a positive integer".to_string());
        }

        // Time-based seed unless one was given
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            mode,
            input_file,
            output_file,
            delimiter,
            width,
            lenient,
            sample_bytes,
            seed,
            log_level: log_level.unwrap_or_else(|| "warn".to_string()),
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        eprintln!("=== Configuration ===");
        eprintln!("Mode:      {:?}", self.mode);
        eprintln!("Input:     {}", self.input_label());
        eprintln!(
            "Output:    {}",
            self.output_file
                .as_ref()
                .map_or("(stdout)".to_string(), |p| p.display().to_string())
        );
        eprintln!("Delimiter: {} ({:?})", self.delimiter, self.delimiter.literal());
        eprintln!("Width:     {}", self.width);
        if self.mode == Mode::Decode {
            eprintln!("Lenient:   {}", self.lenient);
        }
        eprintln!("Seed:      {}", self.seed);
        eprintln!("Log level: {}", self.log_level);
        eprintln!();
    }

    fn input_label(&self) -> String {
        match (&self.input_file, self.sample_bytes) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(n)) => format!("(generated sample, {} bytes)", n),
            (None, None) => "(stdin)".to_string(),
        }
    }
}

/// Take the value following the flag at `args[*i]`, advancing `i`.
fn value<'a>(args: &'a [String], i: &mut usize, what: &str) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires {}", flag, what))
}

fn print_help() {
    println!("binconv: convert between bytes and binary-digit text");
    println!();
    println!("USAGE:");
    println!("    binconv <encode|decode> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>          Input file (default: stdin)");
    println!("    --out <PATH>         Output file (default: stdout)");
    println!("    --delim <NAME>       Delimiter name (default: Space)");
    println!("    --width <N>          Digits per group (default: 8)");
    println!("    --lenient            decode: print groups, NaN included, instead of bytes");
    println!();
    println!("    --sample <N>         encode: generate N sample bytes instead of reading input");
    println!("    --seed <N>           Seed for --sample (default: time-based)");
    println!();
    println!("    --log-level <LEVEL>  Log filter when RUST_LOG is unset (default: warn)");
    println!("    --print-config       Print resolved configuration");
    println!("    --stats              Print conversion summary");
    println!("    --help, -h           Print this help");
    println!();
    println!("DELIMITERS:");
    for delim in Delimiter::ALL {
        println!("    {:<26} {:?}", delim.name(), delim.literal());
    }
    println!();
    println!("EXAMPLES:");
    println!("    printf 'Hi' | binconv encode                  # 01001000 01101001");
    println!("    binconv decode --delim Colon --in bits.txt    # raw bytes to stdout");
    println!("    binconv encode --sample 16 --seed 42 --stats  # deterministic sample");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&args(&["encode"])).unwrap();
        assert_eq!(config.mode, Mode::Encode);
        assert_eq!(config.delimiter, Delimiter::Space);
        assert_eq!(config.width, 8);
        assert_eq!(config.log_level, "warn");
        assert!(config.input_file.is_none());
        assert!(!config.lenient);
    }

    #[test]
    fn test_full_decode_args() {
        let config = Config::from_args(&args(&[
            "decode", "--delim", "Line feed", "--width", "16", "--lenient", "--in", "bits.txt", "--stats",
        ]))
        .unwrap();
        assert_eq!(config.mode, Mode::Decode);
        assert_eq!(config.delimiter, Delimiter::LineFeed);
        assert_eq!(config.width, 16);
        assert!(config.lenient);
        assert!(config.print_stats);
        assert_eq!(config.input_file, Some(PathBuf::from("bits.txt")));
    }

    #[test]
    fn test_explicit_seed() {
        let config = Config::from_args(&args(&["encode", "--sample", "10", "--seed", "42"])).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.sample_bytes, Some(10));
    }

    #[test]
    fn test_errors() {
        assert!(Config::from_args(&args(&[])).is_err());
        assert!(Config::from_args(&args(&["transcode"])).is_err());
        assert!(Config::from_args(&args(&["encode", "--delim", "Pipe"])).is_err());
        assert!(Config::from_args(&args(&["encode", "--width"])).is_err());
        assert!(Config::from_args(&args(&["encode", "--width", "3.5"])).is_err());
        assert!(Config::from_args(&args(&["decode", "--width", "0"])).is_err());
        assert!(Config::from_args(&args(&["decode", "--sample", "4"])).is_err());
        assert!(Config::from_args(&args(&["encode", "--lenient"])).is_err());
        assert!(Config::from_args(&args(&["encode", "--bogus"])).is_err());
    }

    #[test]
    fn test_zero_width_allowed_for_encode() {
        let config = Config::from_args(&args(&["encode", "--width", "0"])).unwrap();
        assert_eq!(config.width, 0);
    }
}
