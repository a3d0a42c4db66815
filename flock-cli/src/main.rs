use anyhow::{Context, Result};
use clap::Parser;
use flock_core::{Agent, Vector, World};
use flock_shared::{AgentState, FrameSnapshot, WorldSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "N-dimensional flocking simulation", long_about = None)]
struct Args {
    /// World dimension (ignored when --settings supplies bounds)
    #[arg(short, long, default_value_t = 3)]
    dimension: usize,

    /// Number of agents to spawn
    #[arg(short = 'n', long, default_value_t = 50)]
    count: usize,

    /// Number of groups to spread the agents across
    #[arg(short, long, default_value_t = 1)]
    groups: usize,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// RNG seed for reproducible runs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a WorldSettings JSON document
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Emit a JSON frame snapshot per tick instead of a final summary
    #[arg(long)]
    frames: bool,
}

fn load_settings(args: &Args) -> Result<WorldSettings> {
    match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse settings file {}", path.display()))
        }
        None => Ok(WorldSettings {
            bounds: vec![100.0; args.dimension],
            ..WorldSettings::default()
        }),
    }
}

fn build_world(settings: &WorldSettings) -> Result<World> {
    let mut world = World::new(settings.bounds.len());
    world.set_bounds(Vector::from_components(settings.bounds.clone()));
    world.set_max_speed(settings.max_speed)?;
    world.set_max_force(settings.max_force)?;
    world.set_min_separation(settings.min_separation)?;
    Ok(world)
}

fn snapshot(world: &World) -> FrameSnapshot {
    FrameSnapshot {
        tick: world.ticks(),
        agents: world
            .agents()
            .iter()
            .map(|agent: &Agent| AgentState {
                position: agent.position.components().to_vec(),
                velocity: agent.velocity.components().to_vec(),
                group: agent.group(),
            })
            .collect(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    let mut world = build_world(&settings)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let groups = args.groups.max(1);
    for i in 0..args.count {
        let group = (i % groups) as i32;
        let agent = Agent::random(world.bounds(), world.max_speed(), group, &mut rng)?;
        world.add_agent(agent);
    }
    log::info!(
        "spawned {} agent(s) across {} group(s) in a {}-dimensional world",
        args.count,
        groups,
        world.bounds().dimension()
    );

    for _ in 0..args.ticks {
        world.tick()?;
        if args.frames {
            println!("{}", serde_json::to_string(&snapshot(&world))?);
        }
    }

    if !args.frames {
        let mean_speed = if world.agents().is_empty() {
            0.0
        } else {
            world
                .agents()
                .iter()
                .map(|a| a.velocity.magnitude())
                .sum::<f64>()
                / world.agents().len() as f64
        };
        println!(
            "ran {} tick(s): {} agent(s), mean speed {:.3} (cap {})",
            world.ticks(),
            world.agents().len(),
            mean_speed,
            world.max_speed()
        );
    }
    Ok(())
}
