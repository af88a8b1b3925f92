use anyhow::{Context, Result};
use clap::Parser;
use terrain_robot::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let terrain = terrain_robot::read_terrain(&args.input_path).with_context(|| {
        format!(
            "Failed to read terrain from given file({}).",
            args.input_path.display()
        )
    })?;

    let route = terrain.min_cost_route();
    println!(
        "Least cost through terrain is {}, moving {}.",
        route.cost_text(),
        route.moves_text()
    );

    Ok(())
}
