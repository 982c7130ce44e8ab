// File: ./src/cli.rs
//! Command-line surface: argument parsing, help text and the one-shot
//! subcommands that do not need the TUI.
use crate::controller::FestivalController;
use crate::model::FestivalRecord;
use crate::store::FestivalStore;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    Help,
    List,
    Add {
        name: String,
        month: String,
        day: String,
    },
    /// 1-based index as shown by `list`.
    Remove(usize),
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub override_root: Option<PathBuf>,
}

/// Parses `args` (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut override_root = None;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                return Ok(Invocation {
                    command: Command::Help,
                    override_root,
                });
            }
            "--root" | "-r" => {
                let root = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--root requires a path"))?;
                override_root = Some(PathBuf::from(root));
                i += 1; // Also consumed the value
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let command = match positional.first().map(String::as_str) {
        None => Command::Tui,
        Some("list") => Command::List,
        Some("next") => Command::Next,
        Some("add") => match &positional[1..] {
            [name, month, day] => Command::Add {
                name: name.clone(),
                month: month.clone(),
                day: day.clone(),
            },
            _ => anyhow::bail!("usage: utsav add <name> <month> <day>"),
        },
        Some("remove") => {
            let raw = positional
                .get(1)
                .ok_or_else(|| anyhow::anyhow!("usage: utsav remove <index>"))?;
            let index: usize = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("index must be a positive number, got '{}'", raw))?;
            if index == 0 {
                anyhow::bail!("indices start at 1");
            }
            Command::Remove(index)
        }
        Some(other) => anyhow::bail!("unknown command '{}'. Try 'utsav --help'", other),
    };

    Ok(Invocation {
        command,
        override_root,
    })
}

pub fn print_help(binary_name: &str) {
    println!(
        "Utsav v{} - Countdown to Bikram Sambat festivals",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]                  Start interactive TUI", binary_name);
    println!("    {} list                             List saved festivals", binary_name);
    println!("    {} add <name> <month> <day>         Add a festival (BS month/day)", binary_name);
    println!("    {} remove <index>                   Remove festival by list index", binary_name);
    println!("    {} next                             Print next dates and countdowns", binary_name);
    println!("    {} --help                           Show this help message", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("CALENDAR DATA:");
    println!("    BS to AD conversion needs a calendar table (bs_calendar.json) in the data");
    println!("    directory, or a path set as 'calendar_data' in config.toml.");
    println!();
    println!("KEYBINDINGS:");
    println!("    j/k or Up/Down    Select festival");
    println!("    a                 Add festival");
    println!("    d                 Remove selected festival");
    println!("    q                 Quit");
}

pub fn write_list<W: Write>(store: &FestivalStore, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "(no festivals)")?;
        return Ok(());
    }
    writeln!(out, "  {:>3}  {:<24} {:>5} {:>3}", "#", "Name", "Month", "Day")?;
    for (i, f) in store.festivals().iter().enumerate() {
        writeln!(out, "  {:>3}  {:<24} {:>5} {:>3}", i + 1, f.name, f.month, f.day)?;
    }
    Ok(())
}

pub fn add<W: Write>(
    store: &mut FestivalStore,
    name: &str,
    month: &str,
    day: &str,
    out: &mut W,
) -> Result<()> {
    let record = FestivalRecord::from_input(name, month, day)?;
    let index = store.add(record)?;
    if let Some(f) = store.get(index) {
        writeln!(out, "Added #{}: {}", index + 1, f.name)?;
    }
    Ok(())
}

pub fn remove<W: Write>(store: &mut FestivalStore, index: usize, out: &mut W) -> Result<()> {
    match store.remove(index.saturating_sub(1))? {
        Some(f) => writeln!(out, "Removed #{}: {}", index, f.name)?,
        None => anyhow::bail!("no festival at index {} (have {})", index, store.len()),
    }
    Ok(())
}

pub fn write_next<W: Write>(
    controller: &FestivalController,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<()> {
    if controller.store.is_empty() {
        writeln!(out, "(no festivals)")?;
        return Ok(());
    }
    for i in 0..controller.store.len() {
        match controller.resolve(i, now.date()) {
            Some(Ok(occ)) => writeln!(out, "{}  {}", occ.headline(), occ.remaining(now))?,
            Some(Err(e)) => {
                let name = controller
                    .store
                    .get(i)
                    .map(|f| f.name.as_str())
                    .unwrap_or("?");
                writeln!(out, "{} — Error: {}", name, e)?
            }
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppContext, TestContext};

    #[test]
    fn test_no_args_starts_tui() {
        let inv = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(inv.command, Command::Tui);
        assert_eq!(inv.override_root, None);
    }

    #[test]
    fn test_root_and_add() {
        let inv = parse_args(["--root", "/tmp/u", "add", "Tihar", "7", "15"]).unwrap();
        assert_eq!(inv.override_root, Some(PathBuf::from("/tmp/u")));
        assert_eq!(
            inv.command,
            Command::Add {
                name: "Tihar".to_string(),
                month: "7".to_string(),
                day: "15".to_string()
            }
        );
    }

    #[test]
    fn test_bad_invocations() {
        assert!(parse_args(["--root"]).is_err());
        assert!(parse_args(["add", "Tihar"]).is_err());
        assert!(parse_args(["remove", "0"]).is_err());
        assert!(parse_args(["remove", "abc"]).is_err());
        assert!(parse_args(["frobnicate"]).is_err());
        assert_eq!(parse_args(["remove", "2"]).unwrap().command, Command::Remove(2));
    }

    #[test]
    fn test_add_list_remove() {
        let ctx = TestContext::new();
        let mut store = FestivalStore::open(ctx.get_festival_path().unwrap());
        let mut out = Vec::new();

        add(&mut store, "Dashain", "6", "10", &mut out).unwrap();
        add(&mut store, "Tihar", "7", "15", &mut out).unwrap();
        assert!(add(&mut store, "Bad", "x", "1", &mut out).is_err());
        assert_eq!(store.len(), 2);

        remove(&mut store, 1, &mut out).unwrap();
        assert!(remove(&mut store, 5, &mut out).is_err());

        let mut listing = Vec::new();
        write_list(&store, &mut listing).unwrap();
        let listing = String::from_utf8(listing).unwrap();
        assert!(listing.contains("Tihar"));
        assert!(!listing.contains("Dashain"));

        let log = String::from_utf8(out).unwrap();
        assert!(log.contains("Added #1: Dashain"));
        assert!(log.contains("Removed #1: Dashain"));
    }

    #[test]
    fn test_empty_list() {
        let ctx = TestContext::new();
        let store = FestivalStore::open(ctx.get_festival_path().unwrap());
        let mut out = Vec::new();
        write_list(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no festivals)\n");
    }
}
