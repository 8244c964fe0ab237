//! Saved view options — `tix prefs`.

use anyhow::Result;

use tix::prefs::{ViewPrefs, prefs_path};

use super::super::PrefsCommands;

pub fn cmd_prefs(command: Option<PrefsCommands>) -> Result<()> {
    let path = prefs_path()?;

    match command {
        None | Some(PrefsCommands::Show) => {
            println!();
            println!("Saved view options");
            println!("==================");
            println!();

            match ViewPrefs::load(&path)? {
                Some(prefs) => {
                    println!("Prefs file: {}", path.display());
                    println!();
                    println!("  group_by = \"{}\"", prefs.group_by.as_str());
                    println!("  sort_by  = \"{}\"", prefs.sort_by.as_str());
                    println!();
                }
                None => {
                    println!("No prefs file found at {}", path.display());
                    println!();
                    let defaults = ViewPrefs::default();
                    println!("Using default view options:");
                    println!("  group_by = \"{}\"", defaults.group_by.as_str());
                    println!("  sort_by  = \"{}\"", defaults.sort_by.as_str());
                    println!();
                    println!("Run 'tix board --group-by <mode>' to save a preference.");
                    println!();
                }
            }
        }
        Some(PrefsCommands::Clear) => {
            if ViewPrefs::clear(&path)? {
                println!("Removed {}", path.display());
            } else {
                println!("No prefs file found at {}", path.display());
            }
        }
    }

    Ok(())
}
