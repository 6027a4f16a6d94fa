use parklane::CarId;

pub const HELP: &str = "\
Commands:
  admit <carID>     park a car on top of the lane (alias: park)
  retrieve <carID>  fetch a car from anywhere in the lane
  help              show this summary
  exit              leave (alias: quit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Admit(CarId),
    Retrieve(CarId),
    Help,
    Exit,
}

/// Parses one non-empty input line. Errors are user-facing messages; the
/// caller reports them and leaves the lane untouched.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };
    let command = match word {
        "admit" | "park" => Command::Admit(parse_car_id(word, parts.next())?),
        "retrieve" => Command::Retrieve(parse_car_id(word, parts.next())?),
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => return Err(format!("invalid command: {}", other)),
    };
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected argument: {}", extra));
    }
    Ok(command)
}

fn parse_car_id(command: &str, arg: Option<&str>) -> Result<CarId, String> {
    let Some(arg) = arg else {
        return Err(format!("{} needs a car ID", command));
    };
    arg.parse::<CarId>()
        .map_err(|_| format!("bad car ID: {}", arg))
}

#[cfg(test)]
mod test {
    use super::{Command, parse};

    #[test]
    fn test_parse_admit_and_alias() {
        assert_eq!(parse("admit 42"), Ok(Command::Admit(42)));
        assert_eq!(parse("park 42"), Ok(Command::Admit(42)));
        assert_eq!(parse("  admit   7  "), Ok(Command::Admit(7)));
    }

    #[test]
    fn test_parse_retrieve_negative_id() {
        assert_eq!(parse("retrieve -1"), Ok(Command::Retrieve(-1)));
    }

    #[test]
    fn test_parse_exit_help() {
        assert_eq!(parse("exit"), Ok(Command::Exit));
        assert_eq!(parse("quit"), Ok(Command::Exit));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("launch 3").is_err());
        assert!(parse("admit").is_err());
        assert!(parse("admit abc").is_err());
        assert!(parse("admit 1 2").is_err());
        assert!(parse("").is_err());
    }
}
