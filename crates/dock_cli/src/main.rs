mod logging;
mod platform;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::PathBuf;

use dock_core::{
    DialogService, DockController, DockSettings, DragPayload, FileLayoutStore, GroupId,
    LaunchOutcome, NoIcons, Point, Services,
};
use platform::{AssumeYes, NativeDialogs, NativeFilePicker, SystemLauncher};

#[derive(Parser, Debug)]
#[command(name = "slidedock")]
#[command(about = "Manage the SlideDock launcher layout")]
#[command(version)]
struct Cli {
    /// Directory holding configuration.json
    #[arg(long, env = "SLIDEDOCK_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Answer yes to every confirmation
    #[arg(long, short)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show groups and items
    List,
    /// Add an empty group
    AddGroup {
        name: Option<String>,
    },
    /// Remove a group and all of its items
    RemoveGroup {
        group: usize,
    },
    RenameGroup {
        group: usize,
        name: String,
    },
    /// Expand or collapse a group
    ToggleGroup {
        group: usize,
    },
    /// Add paths, to the first group unless one is given
    Add {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        group: Option<usize>,
    },
    /// Add a file picked in a dialog
    AddFile {
        #[arg(long)]
        group: Option<usize>,
    },
    /// Add a folder picked in a dialog
    AddFolder {
        #[arg(long, default_value_t = 0)]
        group: usize,
    },
    Remove {
        group: usize,
        path: String,
    },
    Rename {
        group: usize,
        path: String,
        name: String,
    },
    /// Move an item to a new position within its group
    Reorder {
        group: usize,
        path: String,
        index: usize,
    },
    /// Move an item to another group
    Move {
        path: String,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    Launch {
        group: usize,
        path: String,
    },
    /// Open the folder containing an item
    OpenLocation {
        group: usize,
        path: String,
    },
    /// Switch the dock between the left and right screen edge
    ToggleSide,
    ToggleExpanded,
    /// Keep the dock above other windows
    Topmost {
        #[arg(value_enum)]
        state: Switch,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config_dir {
        Some(dir) => DockSettings::with_config_dir(dir),
        None => DockSettings::from_env().context("Failed to resolve configuration directory")?,
    };
    debug!("Using layout file {:?}", settings.layout_path());

    let dialogs: Box<dyn DialogService> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(NativeDialogs)
    };
    let services = Services {
        dialogs,
        files: Box::new(NativeFilePicker),
        launcher: Box::new(SystemLauncher),
        icons: Box::new(NoIcons),
    };

    let store = FileLayoutStore::from_settings(&settings);
    let mut dock = DockController::new(store, services, settings);
    dock.subscribe(|event| debug!("Dock event: {:?}", event));

    execute(&mut dock, cli.command)?;
    dock.shutdown();
    Ok(())
}

fn execute(dock: &mut DockController, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List => print!("{}", render(dock)),
        Commands::AddGroup { name } => {
            let id = dock.add_group(name.as_deref());
            let group = dock.group_checked(id)?;
            println!("Added group '{}'", group.name());
        }
        Commands::RemoveGroup { group } => {
            let id = dock.group_id_checked(group)?;
            report(dock.remove_group(id), "Removed group");
        }
        Commands::RenameGroup { group, name } => {
            let id = dock.group_id_checked(group)?;
            report(dock.rename_group(id, &name), "Renamed group");
        }
        Commands::ToggleGroup { group } => {
            let id = dock.group_id_checked(group)?;
            match dock.toggle_group_expanded(id) {
                Some(true) => println!("Group expanded"),
                Some(false) => println!("Group collapsed"),
                None => println!("Nothing changed"),
            }
        }
        Commands::Add { paths, group } => {
            let paths = paths
                .iter()
                .map(|path| std::path::absolute(path).map(|p| p.display().to_string()))
                .collect::<std::io::Result<Vec<_>>>()
                .context("Failed to resolve path")?;
            let payload = DragPayload::external(paths);
            let changed = match group {
                Some(index) => {
                    let id = dock.group_id_checked(index)?;
                    dock.drop_on_group(id, &payload, Point::default(), &[])
                }
                None => dock.drop_on_dock(&payload),
            };
            report(changed, "Added items");
        }
        Commands::AddFile { group } => {
            let changed = match group {
                Some(index) => {
                    let id = dock.group_id_checked(index)?;
                    dock.add_item_from_file_dialog(id)
                }
                None => dock.add_item_from_dialog(),
            };
            report(changed, "Added item");
        }
        Commands::AddFolder { group } => {
            let id = dock.group_id_checked(group)?;
            report(dock.add_folder_from_dialog(id), "Added folder");
        }
        Commands::Remove { group, path } => {
            let id = item_group(dock, group, &path)?;
            report(dock.remove_item(id, &path), "Removed item");
        }
        Commands::Rename { group, path, name } => {
            let id = item_group(dock, group, &path)?;
            report(dock.rename_item(id, &path, &name), "Renamed item");
        }
        Commands::Reorder { group, path, index } => {
            let id = item_group(dock, group, &path)?;
            report(dock.reorder_item(id, &path, index), "Reordered item");
        }
        Commands::Move { path, from, to } => {
            let source = item_group(dock, from, &path)?;
            let target = dock.group_id_checked(to)?;
            if source == target {
                bail!("Source and target group are the same");
            }
            report(
                dock.move_item_between_groups(&path, Some(source), Some(target)),
                "Moved item",
            );
        }
        Commands::Launch { group, path } => {
            let id = item_group(dock, group, &path)?;
            match dock.launch_item(id, &path) {
                LaunchOutcome::Launched => println!("Launched {}", path),
                LaunchOutcome::StaleRemoved => println!("Target missing, item removed"),
                LaunchOutcome::StaleKept => println!("Target missing, item kept"),
                LaunchOutcome::NotConfigured => bail!("Item path is not configured"),
                LaunchOutcome::Failed => bail!("Failed to launch {}", path),
                LaunchOutcome::NotFound => bail!("Item not found: {}", path),
            }
        }
        Commands::OpenLocation { group, path } => {
            let id = item_group(dock, group, &path)?;
            if !dock.open_item_location(id, &path) {
                bail!("Location of {} is not available", path);
            }
        }
        Commands::ToggleSide => println!("Dock side: {:?}", dock.toggle_dock_side()),
        Commands::ToggleExpanded => {
            let expanded = dock.toggle_expanded();
            println!("Dock {}", if expanded { "expanded" } else { "collapsed" });
        }
        Commands::Topmost { state } => {
            report(dock.set_always_on_top(state == Switch::On), "Updated always-on-top");
        }
    }
    Ok(())
}

/// Resolve the group at `index` and make sure it holds `path`.
fn item_group(dock: &DockController, index: usize, path: &str) -> anyhow::Result<GroupId> {
    let id = dock.group_id_checked(index)?;
    dock.item_checked(id, path)?;
    Ok(id)
}

fn report(changed: bool, message: &str) {
    if changed {
        println!("{}", message);
    } else {
        println!("Nothing changed");
    }
}

fn render(dock: &DockController) -> String {
    let mut out = format!(
        "Dock: {:?} side, {}, always on top: {}\n",
        dock.dock_side(),
        if dock.is_expanded() { "expanded" } else { "collapsed" },
        if dock.is_always_on_top() { "yes" } else { "no" },
    );
    for (index, group) in dock.groups().iter().enumerate() {
        let marker = if group.is_expanded() { "-" } else { "+" };
        out.push_str(&format!("{} [{}] {}\n", marker, index, group.name()));
        for (position, item) in group.items().iter().enumerate() {
            out.push_str(&format!(
                "    {}. {} ({}) {}\n",
                position,
                item.name,
                item.kind.label(),
                item.path
            ));
        }
    }
    out
}
