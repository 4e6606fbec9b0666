extern crate memorable_password;

use std::{path::PathBuf, process};

use memorable_password::{settings, MemorablePassword};

const USAGE: &str =
    "usage: memorable-password [-h|--help] [-w|--word [LIMIT]] [--settings] [COUNT]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Passwords(usize),
    Word(Option<usize>),
    Settings,
}

fn help() {
    println!("memorable-password - generates passwords that humans can remember");
    println!();
    println!("{USAGE}");
    println!();
    println!("  COUNT              number of passwords to print, defaults to 1");
    println!("  -w, --word [LIMIT] print a single word of at most LIMIT characters, 0 means no limit");
    println!("      --settings     print the settings in use as toml");
    println!();
    println!(
        "Settings are read from $XDG_CONFIG_HOME/memorable-password/settings.toml and from \
         environment variables starting with {}_",
        settings::ENV_PREFIX
    );
}

fn parse_number(arg: &str) -> Result<usize, String> {
    arg.parse().map_err(|_| format!("Not a number: {arg}"))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Passwords(1)),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [flag] if flag == "--settings" => Ok(Command::Settings),
        [flag] if flag == "-w" || flag == "--word" => Ok(Command::Word(None)),
        [flag, limit] if flag == "-w" || flag == "--word" => {
            Ok(Command::Word(Some(parse_number(limit)?)))
        }
        [count] if !count.starts_with('-') => Ok(Command::Passwords(parse_number(count)?)),
        _ => Err(format!("Unknown argument, {USAGE}")),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(Command::Help) => {
            help();
            process::exit(0);
        }
        Ok(c) => c,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let settings = match settings::read_settings(&home, &xdg_config_home) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error reading settings: {err}");
            process::exit(1);
        }
    };
    log::debug!("using settings {:?}", settings);

    let mut generator = MemorablePassword::from_settings(&settings, rand::thread_rng());

    match command {
        Command::Help => help(),
        Command::Settings => match settings.to_toml() {
            Ok(content) => print!("{content}"),
            Err(err) => {
                eprintln!("Error {err}");
                process::exit(1);
            }
        },
        Command::Word(limit) => println!("{}", generator.get_word(limit)),
        Command::Passwords(count) => {
            for _ in 0..count {
                match generator.generate() {
                    Ok(password) => println!("{password}"),
                    Err(err) => {
                        eprintln!("Error {err}");
                        process::exit(1);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/main.rs"]
mod main_tests;
