use std::io::{self, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Define(String),
    Tools,
    Unknown(String),
}

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Splits a prompt line into a command. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut command_parts = line.trim().split_ascii_whitespace();
    let command = command_parts.next()?;
    let command = match command {
        "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Exit,
        "define" | "find" => Command::Define(command_parts.collect::<Vec<&str>>().join(" ")),
        "tools" => Command::Tools,
        other => Command::Unknown(other.to_owned()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(parse_command("   \n"), None);
    }

    #[test]
    fn define_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_command("define  ice   cream\n"),
            Some(Command::Define("ice cream".into()))
        );
        assert_eq!(parse_command("find"), Some(Command::Define(String::new())));
    }

    #[test]
    fn exit_aliases() {
        for alias in ["exit", "leave", "quit", "e", "q", "l"] {
            assert_eq!(parse_command(alias), Some(Command::Exit));
        }
    }

    #[test]
    fn unknown() {
        assert_eq!(parse_command("practice"), Some(Command::Unknown("practice".into())));
    }
}
