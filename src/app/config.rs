//! Application configuration from CLI arguments

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::config_file::{ConfigFile, UiConfig};
use crate::entry::{find_library, Library};
use crate::integrate::{exit_code, OutputFormat};

/// What the binary should do once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal browser
    Interactive,
    /// Print the entries of a library folder
    List { parent: String },
    /// Print a single entry (or nothing)
    Lookup { path: String },
    /// Write the bytes of a library file to stdout
    Download { path: String },
    /// Expand dropped paths and print everything they contain
    Collect { items: Vec<PathBuf>, files_only: bool },
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Root folder of the active library
    pub root: PathBuf,
    /// Display name of the active library
    pub library_name: String,
    /// Libraries configured in the config file
    pub libraries: Vec<Library>,
    /// Start on the library picker instead of a library
    pub choose_library: bool,
    pub mode: RunMode,
    pub pick_mode: bool,
    pub output_format: OutputFormat,
    /// Show hidden files (config file, CLI can override)
    pub show_hidden: bool,
    /// Ask before deleting (from config file)
    pub confirm_delete: bool,
    /// Display settings (from config file)
    pub ui: UiConfig,
    /// Explicit log file, overriding the cache location
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1), ConfigFile::load())
    }

    /// Parse arguments (without the program name) on top of a config file
    pub fn parse<I>(args: I, config_file: ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().peekable();
        let mut root_arg: Option<PathBuf> = None;
        let mut library_arg: Option<String> = None;
        let mut pick_mode = false;
        let mut output_format = OutputFormat::default();
        let mut show_hidden: Option<bool> = None;
        let mut mode = RunMode::Interactive;
        let mut collect_items: Option<Vec<PathBuf>> = None;
        let mut files_only = false;
        let mut log_file: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pick" | "-p" => pick_mode = true,
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--list" | "-l" => {
                    // Optional folder argument; an existing absolute folder
                    // is the library root instead
                    let parent =
                        args.next_if(|next| !next.starts_with('-') && !is_root_folder(next));
                    mode = RunMode::List {
                        parent: parent.unwrap_or_else(|| "/".to_string()),
                    };
                }
                list if list.starts_with("--list=") => {
                    mode = RunMode::List {
                        parent: list["--list=".len()..].to_string(),
                    };
                }
                "--lookup" => {
                    let Some(path) = args.next() else {
                        anyhow::bail!("--lookup requires a library path");
                    };
                    mode = RunMode::Lookup { path };
                }
                "--download" | "-d" => {
                    let Some(path) = args.next_if(|next| !next.starts_with('-')) else {
                        anyhow::bail!("--download requires a library path");
                    };
                    mode = RunMode::Download { path };
                }
                "--library" | "-L" => {
                    let Some(name) = args.next() else {
                        anyhow::bail!("--library requires a library name");
                    };
                    library_arg = Some(name);
                }
                "--collect" | "-c" => {
                    let mut items = Vec::new();
                    while let Some(item) = args.next_if(|next| !next.starts_with('-')) {
                        items.push(PathBuf::from(item));
                    }
                    if items.is_empty() {
                        anyhow::bail!("--collect requires at least one path");
                    }
                    collect_items = Some(items);
                }
                "--files-only" => files_only = true,
                "--format" | "-f" => {
                    if let Some(fmt) = args.next() {
                        output_format = OutputFormat::from_str(&fmt).map_err(|_| {
                            anyhow::anyhow!(
                                "Invalid format '{}'. Valid formats: lines, null, json",
                                fmt
                            )
                        })?;
                    } else {
                        anyhow::bail!("--format requires a value (lines, null, or json)");
                    }
                }
                "--log-file" => {
                    if let Some(file) = args.next() {
                        log_file = Some(PathBuf::from(file));
                    } else {
                        anyhow::bail!("--log-file requires a file path");
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("enav {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    let p = PathBuf::from(path);
                    if p.is_dir() {
                        root_arg = Some(p.canonicalize()?);
                    } else if p.exists() {
                        anyhow::bail!("Library root is not a folder: {}", path);
                    } else {
                        anyhow::bail!("Path does not exist: {}", path);
                    }
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        if let Some(items) = collect_items {
            mode = RunMode::Collect { items, files_only };
        } else if files_only {
            anyhow::bail!("--files-only can only be used with --collect");
        }

        if pick_mode && mode != RunMode::Interactive {
            anyhow::bail!(
                "--pick cannot be combined with --list, --lookup, --download or --collect"
            );
        }

        let libraries = config_file.libraries;
        let (library, choose_library) = match (root_arg, library_arg) {
            (Some(_), Some(_)) => {
                anyhow::bail!("--library cannot be combined with a LIBRARY_ROOT argument");
            }
            (Some(root), None) => (Library::from_folder(root), false),
            (None, Some(name)) => {
                let Some(library) = find_library(&libraries, &name) else {
                    anyhow::bail!(
                        "Unknown library: {}. Configured libraries: {}",
                        name,
                        library_names(&libraries)
                    );
                };
                (library.clone(), false)
            }
            (None, None) => match libraries.as_slice() {
                [] => (Library::from_folder(env::current_dir()?), false),
                [only] => (only.clone(), false),
                // Scripts get the current folder; the UI asks
                [..] => (
                    Library::from_folder(env::current_dir()?),
                    mode == RunMode::Interactive,
                ),
            },
        };

        let root = if choose_library {
            library.root_path()
        } else {
            library.resolve_root()?.canonicalize()?
        };

        // CLI arguments take precedence over config file
        Ok(Self {
            root,
            library_name: library.name,
            libraries,
            choose_library,
            mode,
            pick_mode,
            output_format,
            show_hidden: show_hidden.unwrap_or(config_file.general.show_hidden),
            confirm_delete: config_file.general.confirm_delete,
            ui: config_file.ui,
            log_file,
        })
    }
}

/// An existing absolute folder other than `/` names a library root
fn is_root_folder(arg: &str) -> bool {
    let path = Path::new(arg);
    arg != "/" && path.is_absolute() && path.is_dir()
}

fn library_names(libraries: &[Library]) -> String {
    if libraries.is_empty() {
        return "(none)".to_string();
    }
    libraries
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    println!(
        r#"enav - browse a library folder from the terminal

USAGE:
    enav [LIBRARY_ROOT] [OPTIONS]
    enav --library NAME [OPTIONS]

    Give LIBRARY_ROOT before --list, or use --list=FOLDER. An absolute path
    to an existing folder after --list is taken as LIBRARY_ROOT.

OPTIONS:
    -p, --pick            Pick mode: output the chosen file path to stdout
    -a, --hidden          Show hidden files
    --no-hidden           Hide hidden files (default)
    -L, --library NAME    Open the library NAME from config.toml
    -l, --list [FOLDER]   Print the entries of FOLDER (default: library root)
    --list=FOLDER         Same, without ambiguity
    --lookup PATH         Print the entry at PATH (nothing if it does not exist)
    -d, --download PATH   Write the file at PATH to stdout
    -c, --collect PATH..  Print PATH and everything below it, as a drop would upload
    --files-only          With --collect, print files only
    -f, --format FMT      Output format: lines, null, json
    --log-file FILE       Write logs to FILE
    -h, --help            Show this help message
    -V, --version         Show version

CONFIG FILE:
    ~/.config/entrynav/config.toml    Main configuration file
    ~/.config/entrynav/keymap.toml    Key bindings (customizable)

    [[library]] tables name libraries:
        [[library]]
        name = "Movies"
        root = "~/media/movies"
        type = "movies"    # generic, books, movies, shows, music

    With several libraries and no LIBRARY_ROOT or --library, the browser
    starts on a library picker.

ENVIRONMENT:
    ENTRYNAV_LOG          Log filter (e.g. debug, entrynav=trace)

KEYBINDINGS:
    k/↑         Select previous (last when nothing is selected)
    j/↓         Select next (first when nothing is selected)
    g/Home      Select first
    G/End       Select last
    Esc         Clear selection
    Enter/l/→   Open folder / show file details (pick file in pick mode)
    h/←/BS      Go to parent folder
    i           Toggle details panel
    .           Toggle hidden files
    r/F5        Refresh
    D/Del       Delete (with confirmation)
    L           Switch library
    q           Quit
    ?           Show help

EXIT CODES:
    0           Success (normal exit or file picked)
    1           Cancelled (quit without picking in pick mode)
    2           Error (runtime error, missing file for --download)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}
