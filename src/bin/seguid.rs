use getopts::Options;

use seguid::{ComplementTable, DoubleStrand, Flavor, Seguid, DNA, IUPAC, RNA};

use std::fs::OpenOptions;
use std::io::{self, Read};
use std::time::Instant;
use std::env;

//-----------------------------------------------------------------------------

fn main() -> Result<(), String> {
    let config = match Config::new()? {
        Some(config) => config,
        None => return Ok(()),
    };

    let input = read_input(config.input_file.as_deref())?;

    let start_time = Instant::now();
    let checksum = compute(&config, &input)?;
    let duration = start_time.elapsed();

    println!("{}", checksum);
    if config.verbose {
        let seconds = duration.as_secs_f64();
        eprintln!("Computed {} in {:.3} seconds", config.flavor, seconds);
        eprintln!();
    }

    Ok(())
}

//-----------------------------------------------------------------------------

struct Config {
    input_file: Option<String>,
    flavor: Flavor,
    table: &'static ComplementTable,
    strict: bool,
    verbose: bool,
}

impl Config {
    // Returns `None` if the program should exit without computing anything.
    fn new() -> Result<Option<Self>, String> {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();
        let header = format!("Usage: {} [options] [sequence.txt]\n\nReads the sequence from standard input if no file is given.", &program);

        let mut opts = Options::new();
        opts.optopt("t", "type", "checksum type (default: seguid)", "seguid|slseguid|scseguid|lseguid|cseguid|dlseguid|dcseguid");
        opts.optopt("a", "alphabet", "complement table (default: iupac)", "dna|rna|iupac");
        opts.optflag("s", "strict", "fail if the sequence contains symbols outside the alphabet");
        opts.optflag("v", "verbose", "print timing information to stderr");
        opts.optflag("V", "version", "print version and exit");
        opts.optflag("h", "help", "print this help and exit");
        let matches = opts.parse(&args[1..]).map_err(|e| e.to_string())?;

        if matches.opt_present("h") {
            println!("{}", opts.usage(&header));
            return Ok(None);
        }
        if matches.opt_present("V") {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(None);
        }

        let flavor = match matches.opt_str("t") {
            Some(name) => Flavor::from_name(&name)
                .ok_or_else(|| format!("Unknown checksum type: {}\n\n{}", name, opts.usage(&header)))?,
            None => Flavor::Seguid,
        };
        let table = match matches.opt_str("a").as_deref() {
            Some("dna") => &DNA,
            Some("rna") => &RNA,
            Some("iupac") | None => &IUPAC,
            Some(name) => return Err(format!("Unknown alphabet: {}\n\n{}", name, opts.usage(&header))),
        };
        let input_file = matches.free.first().cloned();
        let strict = matches.opt_present("s");
        let verbose = matches.opt_present("v");

        Ok(Some(Config { input_file, flavor, table, strict, verbose }))
    }
}

//-----------------------------------------------------------------------------

fn read_input(filename: Option<&str>) -> Result<String, String> {
    let mut input = String::new();
    match filename {
        Some(filename) => {
            let mut options = OpenOptions::new();
            let mut file = options.read(true).open(filename)
                .map_err(|e| format!("Error opening input file {}: {}", filename, e))?;
            file.read_to_string(&mut input)
                .map_err(|e| format!("Error reading input file {}: {}", filename, e))?;
        }
        None => {
            io::stdin().read_to_string(&mut input)
                .map_err(|e| format!("Error reading standard input: {}", e))?;
        }
    }
    Ok(input)
}

// Computes the checksum of the given type for the input.
//
// The double-stranded linear type reads a two-line text figure.
// Other types treat the letters of the input as a single sequence.
fn compute(config: &Config, input: &str) -> Result<Seguid, String> {
    if config.flavor == Flavor::DoubleLinear {
        let molecule = DoubleStrand::from_repr(input, config.table).map_err(|e| e.to_string())?;
        if config.verbose {
            eprintln!("Molecule: {} bp top strand, {} bp bottom strand, overhang {}",
                molecule.watson().len(), molecule.crick().len(), molecule.overhang());
        }
        Ok(molecule.linear_seguid())
    } else {
        let seq = seguid::normalize(input);
        if config.strict {
            config.table.check(&seq).map_err(|e| e.to_string())?;
        }
        if config.verbose {
            eprintln!("Sequence: {} bp", seq.len());
        }
        compute_sequence(config, &seq)
    }
}

fn compute_sequence(config: &Config, seq: &str) -> Result<Seguid, String> {
    match config.flavor {
        Flavor::Seguid => Ok(Seguid::seguid(seq)),
        Flavor::SingleLinear => Ok(Seguid::slseguid(seq)),
        Flavor::SingleCircular => Ok(Seguid::scseguid(seq)),
        Flavor::Linear => Ok(Seguid::lseguid(seq, config.table)),
        Flavor::Circular => Ok(Seguid::cseguid(seq, config.table)),
        Flavor::DoubleLinear => {
            let molecule = DoubleStrand::from_watson(seq, config.table).map_err(|e| e.to_string())?;
            Ok(molecule.linear_seguid())
        }
        Flavor::DoubleCircular => {
            // The bottom strand is the reverse complement of the sequence.
            let molecule = DoubleStrand::from_watson(seq, config.table).map_err(|e| e.to_string())?;
            molecule.circular_seguid().map_err(|e| e.to_string())
        }
    }
}

//-----------------------------------------------------------------------------
