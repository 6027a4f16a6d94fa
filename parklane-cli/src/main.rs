use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use parklane::ParkingLane;
use tracing::debug;

mod command;
mod render;

use command::Command;
use render::{LaneView, PlainView, RetroView};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of parking slots in the lane.
    #[arg(long = "capacity", default_value_t = 5)]
    pub capacity: usize,

    /// Disable color, screen clearing and the loading animation.
    #[arg(long = "plain", default_value_t = false)]
    pub plain: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let view: Box<dyn LaneView> = if cli.plain {
        Box::new(PlainView)
    } else {
        Box::new(RetroView)
    };
    let mut lane = ParkingLane::new(cli.capacity);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    redraw(view.as_ref(), &lane);
    println!("{}\n", command::HELP);
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(&mut stdout)?;
            continue;
        }
        match command::parse(line) {
            Ok(Command::Exit) => break,
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Admit(car)) => {
                view.working("Parking");
                match lane.admit(car) {
                    Ok(()) => {
                        debug!(car, occupied = lane.len(), "car admitted");
                        redraw(view.as_ref(), &lane);
                        println!("{}", view.good(&format!("Car {} parked successfully.", car)));
                    }
                    Err(err) => {
                        debug!(car, "admit rejected: {}", err);
                        println!("{}", view.bad(&format!("ERROR: {}", err)));
                    }
                }
            }
            Ok(Command::Retrieve(car)) => {
                view.working("Retrieving");
                match lane.retrieve(car) {
                    Ok(()) => {
                        debug!(car, occupied = lane.len(), "car retrieved");
                        redraw(view.as_ref(), &lane);
                        println!(
                            "{}",
                            view.good(&format!("Car {} retrieved successfully.", car))
                        );
                    }
                    Err(err) => {
                        debug!(car, "retrieve failed: {}", err);
                        println!("{}", view.bad(&format!("ERROR: {}", err)));
                    }
                }
            }
            Err(message) => println!("{}", view.bad(&message)),
        }
        prompt(&mut stdout)?;
    }

    println!("System Exit. Goodbye!");
    Ok(())
}

fn redraw(view: &dyn LaneView, lane: &ParkingLane) {
    view.clear();
    print!("{}", view.render(lane));
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
