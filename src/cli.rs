// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::params::Params;

pub fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--sport" => {
                params.sport_filter = Some(args.next().ok_or("Missing value for --sport")?);
            }
            "--delay-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                params.feed_delay = Duration::from_millis(v);
            }
            "--min-timestamp" => {
                params.min_timestamp = args.next().ok_or("Missing value for --min-timestamp")?.parse()?;
            }
            "-n" | "--dry-run" => params.dry_run = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
