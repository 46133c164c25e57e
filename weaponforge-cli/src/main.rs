use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use weaponforge_core::{run, GeneratorSettings};

/// Long flags that are also accepted with a single leading dash.
const SINGLE_DASH_FLAGS: &[&str] = &["fin", "ffmt", "ngen", "nperk", "seed", "out"];

#[derive(Debug, Parser)]
#[command(name = "weaponforge", version, about = "Random tabletop weapon generator")]
struct Args {
    /// Input file for generated stats, names, and perks.
    #[arg(long, allow_hyphen_values = true)]
    fin: PathBuf,

    /// Format file for generated weapons.
    #[arg(long, allow_hyphen_values = true)]
    ffmt: PathBuf,

    /// Number of weapons to generate.
    #[arg(long, default_value_t = 1)]
    ngen: usize,

    /// Number of perks to allocate to each weapon.
    #[arg(long, default_value_t = 1)]
    nperk: usize,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write output here instead of stdout.
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    out: Option<PathBuf>,
}

/// Rewrites `-fin x` and `-fin=x` into `--fin x` and `--fin=x`.
///
/// Every known flag takes a value, so the token after a bare flag is
/// passed through untouched even if it looks like a flag.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut value_pending = false;

    for arg in args {
        if value_pending {
            value_pending = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        let Some(rest) = text.strip_prefix('-') else {
            out.push(arg);
            continue;
        };

        let rest = rest.strip_prefix('-').unwrap_or(rest);
        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        if !SINGLE_DASH_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }

        value_pending = !inline_value;
        if text.starts_with("--") {
            out.push(arg);
        } else {
            out.push(OsString::from(format!("-{text}")));
        }
    }

    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("weaponforge_core=info")),
        )
        .init();

    let args = Args::parse_from(normalize_args(std::env::args_os()));

    let settings = GeneratorSettings {
        catalog_path: args.fin,
        template_path: args.ffmt,
        weapon_count: args.ngen,
        perk_count: args.nperk,
        seed: args.seed,
        output_path: args.out,
    };

    if let Err(err) = run(settings) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
