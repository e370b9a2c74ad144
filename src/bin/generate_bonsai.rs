//! Bonsai generation utility
//!
//! Generates one bonsai and prints its voxels and/or writes them as JSON.
//!
//! Usage:
//!     generate_bonsai [OPTIONS]
//!
//! Options:
//!     --seed <SEED>           Seed for RNG (default: random)
//!     --growth <N>            Trunk growth budget (default: 8)
//!     --tiers <N>             Branch tier count (default: 4)
//!     --guard                 Enable the branch self-collision guard
//!     --params <FILE>         Load parameters from a JSON file
//!     -o, --output <FILE>     Write the bonsai as JSON
//!     -p, --print             Print one voxel per line (kind x y z)
//!     -h, --help              Show this help message

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use bonsai::core::logging;
use bonsai::voxel::procgen::{BonsaiGenerator, BonsaiParams, SeededRng, VoxelKind};
use bonsai::voxel::BonsaiData;

fn print_help() {
    eprintln!("generate_bonsai - Procedural voxel bonsai generator");
    eprintln!();
    eprintln!("Usage: generate_bonsai [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    --seed <SEED>           Seed for RNG (default: random)");
    eprintln!("    --growth <N>            Trunk growth budget (default: 8)");
    eprintln!("    --tiers <N>             Branch tier count (default: 4)");
    eprintln!("    --guard                 Enable the branch self-collision guard");
    eprintln!("    --params <FILE>         Load parameters from a JSON file");
    eprintln!("    -o, --output <FILE>     Write the bonsai as JSON");
    eprintln!("    -p, --print             Print one voxel per line (kind x y z)");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    generate_bonsai --seed 42 --print");
    eprintln!("    generate_bonsai --tiers 5 --guard -o ./bonsai.json");
}

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
    growth: Option<i32>,
    tiers: Option<i32>,
    guard: bool,
    params_file: Option<PathBuf>,
    output: Option<PathBuf>,
    print: bool,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut parsed = Args {
        seed: None,
        growth: None,
        tiers: None,
        guard: false,
        params_file: None,
        output: None,
        print: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || -> Result<String, String> {
            i += 1;
            args.get(i).cloned().ok_or_else(|| format!("Missing value for {}", flag))
        };
        match flag {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => {
                let v = value()?;
                parsed.seed = Some(v.parse().map_err(|_| format!("Invalid seed: {}", v))?);
            }
            "--growth" => {
                let v = value()?;
                parsed.growth = Some(v.parse().map_err(|_| format!("Invalid growth: {}", v))?);
            }
            "--tiers" => {
                let v = value()?;
                parsed.tiers = Some(v.parse().map_err(|_| format!("Invalid tiers: {}", v))?);
            }
            "--params" => {
                parsed.params_file = Some(PathBuf::from(value()?));
            }
            "-o" | "--output" => {
                parsed.output = Some(PathBuf::from(value()?));
            }
            "--guard" => parsed.guard = true,
            "-p" | "--print" => parsed.print = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    if parsed.output.is_none() && !parsed.print {
        parsed.print = true;
    }

    Ok(parsed)
}

fn load_params(args: &Args) -> bonsai::core::Result<BonsaiParams> {
    let mut params = match &args.params_file {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => BonsaiParams::classic(),
    };
    if let Some(growth) = args.growth {
        params.growth = growth;
    }
    if let Some(tiers) = args.tiers {
        params.tiers = tiers;
    }
    params.collision_guard |= args.guard;
    params.validate()?;
    Ok(params)
}

fn kind_name(kind: VoxelKind) -> &'static str {
    match kind {
        VoxelKind::Branch => "branch",
        VoxelKind::Leaf => "leaf",
        VoxelKind::Pot => "pot",
        VoxelKind::Soil => "soil",
    }
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let params = match load_params(&args) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Rejected parameters: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => SeededRng::from_seed_u64(seed),
        None => SeededRng::from_entropy(),
    };

    let start = Instant::now();
    let generator = BonsaiGenerator::with_params(params.clone());
    let tree = match generator.generate(&mut rng) {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Generated {} voxels in {:.2}ms",
        tree.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(output) = &args.output {
        let data = BonsaiData::from_bonsai(&tree, &params, args.seed);
        if let Err(e) = data.save_sync(output) {
            log::error!("Error writing {}: {}", output.display(), e);
            std::process::exit(1);
        }
        log::info!("Wrote {}", output.display());
    }

    if args.print {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for (kind, pos) in tree.voxels() {
            if writeln!(out, "{} {} {} {}", kind_name(kind), pos.x, pos.y, pos.z).is_err() {
                // Downstream closed the pipe
                break;
            }
        }
    }
}
