use anyhow::Result;
use clap::Parser;

use camera_toolkit::cli::{run, Cli};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let snapshot = run(&cli)?;

    if cli.json {
        println!("{}", snapshot.to_json()?);
    } else {
        let frame = snapshot.frame;
        println!("style:  {:?}", snapshot.style);
        println!("eye:    ({:.4}, {:.4}, {:.4})", frame.eye.x, frame.eye.y, frame.eye.z);
        println!("center: ({:.4}, {:.4}, {:.4})", frame.center.x, frame.center.y, frame.center.z);
        println!("up:     ({:.4}, {:.4}, {:.4})", frame.up.x, frame.up.y, frame.up.z);
    }

    Ok(())
}
