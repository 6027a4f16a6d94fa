use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use parklane::ParkingLane;

/// Presentation seam between the control loop and the terminal. The lane
/// itself never touches this; a headless test can drive the loop with
/// [`PlainView`] and assert on plain strings.
pub trait LaneView {
    /// Full lane display, top slot first.
    fn render(&self, lane: &ParkingLane) -> String;

    /// Success line for a completed operation.
    fn good(&self, message: &str) -> String {
        message.to_string()
    }

    /// Failure line for a rejected operation or bad input.
    fn bad(&self, message: &str) -> String {
        message.to_string()
    }

    /// Pre-operation feedback (the loading bar). No-op by default.
    fn working(&self, _message: &str) {}

    /// Clears the terminal before a redraw. No-op by default.
    fn clear(&self) {}
}

fn slot_lines(lane: &ParkingLane) -> Vec<String> {
    let mut position = lane.len();
    lane.slots_top_down()
        .into_iter()
        .map(|slot| match slot {
            Some(car) => {
                let line = format!("| CAR : {:<5} | Position : {:<2} |", car, position);
                position -= 1;
                line
            }
            None => "|           [ EMPTY ]           |".to_string(),
        })
        .collect()
}

/// Undecorated renderer for `--plain` runs and tests.
pub struct PlainView;

impl LaneView for PlainView {
    fn render(&self, lane: &ParkingLane) -> String {
        let mut out = String::new();
        out.push_str("STACK BASED PARKING LOT SYS\n");
        out.push_str(&format!(
            "Status : ONLINE | Capacity : {}/{}\n\n",
            lane.len(),
            lane.capacity()
        ));
        for line in slot_lines(lane) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// The reference look: ANSI colors, framed cells, screen clearing and a
/// three-dot loading animation.
pub struct RetroView;

const FRAME: &str = "+-------------------------------+";

impl LaneView for RetroView {
    fn render(&self, lane: &ParkingLane) -> String {
        let mut out = String::new();
        let banner = "+==================================+";
        out.push_str(&format!("{}\n", banner.bright_yellow()));
        out.push_str(&format!(
            "{}\n",
            "|   STACK BASED PARKING LOT SYS    |".bright_yellow()
        ));
        out.push_str(&format!("{}\n\n", banner.bright_yellow()));
        out.push_str(&format!(
            "Status : {} | Capacity : {}/{}\n\n",
            "ONLINE".bright_green(),
            lane.len(),
            lane.capacity()
        ));
        for line in slot_lines(lane) {
            let occupied = line.contains("CAR");
            let cell = if occupied {
                line.bright_magenta()
            } else {
                line.bright_cyan()
            };
            out.push_str(&format!("{}\n{}\n{}\n", frame(occupied), cell, frame(occupied)));
        }
        out
    }

    fn good(&self, message: &str) -> String {
        message.bright_green().to_string()
    }

    fn bad(&self, message: &str) -> String {
        message.bright_red().to_string()
    }

    fn working(&self, message: &str) {
        print!("{}", message.bright_cyan());
        for _ in 0..3 {
            let _ = std::io::stdout().flush();
            std::thread::sleep(Duration::from_millis(300));
            print!("{}", ".".bright_cyan());
        }
        println!();
    }

    fn clear(&self) {
        // Same escape sequence the reference terminal UI used.
        print!("\x1b[H\x1b[J");
    }
}

fn frame(occupied: bool) -> colored::ColoredString {
    if occupied {
        FRAME.bright_magenta()
    } else {
        FRAME.bright_cyan()
    }
}

#[cfg(test)]
mod test {
    use super::{LaneView, PlainView};
    use parklane::ParkingLane;

    #[test]
    fn test_plain_render_slots() {
        let mut lane = ParkingLane::new(3);
        lane.admit(9).unwrap();
        lane.admit(11).unwrap();
        let out = PlainView.render(&lane);
        assert!(out.contains("Status : ONLINE | Capacity : 2/3"));

        let lines: Vec<&str> = out.lines().collect();
        // Top slot first: one vacant cell, then car 11 (position 2), car 9 (position 1).
        assert_eq!(lines[3], "|           [ EMPTY ]           |");
        assert_eq!(lines[4], "| CAR : 11    | Position : 2  |");
        assert_eq!(lines[5], "| CAR : 9     | Position : 1  |");
    }

    #[test]
    fn test_plain_render_empty_lane() {
        let lane = ParkingLane::new(2);
        let out = PlainView.render(&lane);
        assert_eq!(out.matches("[ EMPTY ]").count(), 2);
        assert!(out.contains("Capacity : 0/2"));
    }
}
