//! Lucid FSM compiler CLI
//!
//! Compile a JSON machine description into Lucid control logic.
//!
//! # Example
//!
//! ```bash
//! # Print the compiled blocks
//! lucid-fsm game.json
//!
//! # Write code, diagram and state list, failing on dangling targets
//! lucid-fsm game.json -o fsm_cases.luc --dot fsm.gv --states states.txt --check-targets
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use lucid_fsm::description::MachineDescription;
use lucid_fsm::manifest::BuildManifest;
use lucid_fsm::validate::dangling_targets;
use lucid_fsm::DotGraph;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Lucid FSM compiler
///
/// Reads a machine description and emits one Lucid block per state, in
/// the order the states are listed.
#[derive(Parser, Debug)]
#[command(name = "lucid-fsm")]
#[command(version, about, long_about = None)]
struct Args {
    /// Machine description (JSON)
    description: PathBuf,

    /// Write compiled code here instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write a Graphviz DOT diagram
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Write the state names, one per line
    #[arg(long)]
    states: Option<PathBuf>,

    /// Write a JSON build manifest
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Fail if any transition targets an undeclared state
    #[arg(long)]
    check_targets: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lucid_fsm=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let description = MachineDescription::from_path(&args.description)?;
    let machine = description.to_machine();
    info!(states = machine.len(), "loaded {}", args.description.display());

    if let Err(dangling) = dangling_targets(&machine) {
        for target in &dangling {
            warn!("{}", target);
        }
        if args.check_targets {
            bail!("{} dangling transition target(s)", dangling.len());
        }
    }

    let code = machine
        .compile_with(&description.emitter)
        .context("compilation failed")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &code).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", code),
    }

    if let Some(path) = &args.dot {
        let mut graph = DotGraph::default();
        machine
            .render_diagram(&mut graph)
            .context("diagram rendering failed")?;
        fs::write(path, graph.to_string())
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &args.states {
        let mut names = machine.state_names().collect::<Vec<_>>().join("\n");
        names.push('\n');
        fs::write(path, names).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &args.manifest {
        let manifest = BuildManifest::new(&machine, &description.emitter);
        fs::write(path, manifest.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(id = %manifest.id, "wrote {}", path.display());
    }

    Ok(())
}
