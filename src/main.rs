//! Pengadaan menu tool
//!
//! Loads the dashboard settings (seeding defaults on first run) and prints
//! the navigation menu as a user with the given role would see it.
//!
//! Usage: pengadaan-menu [SETTINGS_JSON] [--role Administrator|User]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use pengadaan_menu::commands::MenuState;
use pengadaan_menu::icon::{IconResolver, LucideIcons};
use pengadaan_menu::navigation::Role;
use pengadaan_menu::repository::JsonFileSettingsRepository;
use pengadaan_menu::MenuNode;

const DEFAULT_SETTINGS_PATH: &str = "pengadaan_settings.json";
const DEFAULT_LOG_DIR: &str = "logs";
const USAGE: &str = "Usage: pengadaan-menu [SETTINGS_JSON] [--role Administrator|User]";

struct Args {
    settings_path: PathBuf,
    role: Role,
}

/// Parse CLI arguments (without the program name).
///
/// Unknown `--` flags and a `--role` with no value are errors.
fn parse_args(args: impl IntoIterator<Item = String>, default_path: PathBuf) -> Result<Args, String> {
    let mut settings_path = default_path;
    let mut role = Role::User;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--role" => {
                let value = args.next().ok_or("--role needs a value")?;
                role = Role::from_str(&value);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option: {}", flag)),
            path => settings_path = PathBuf::from(path),
        }
    }

    Ok(Args { settings_path, role })
}

fn print_nodes(nodes: &[MenuNode], depth: usize, icons: &impl IconResolver) {
    for node in nodes {
        let icon = icons.resolve_or_fallback(&node.icon);
        println!("{}{} {}  [{}]", "  ".repeat(depth), icon.glyph, node.label, node.id);
        print_nodes(&node.children, depth + 1, icons);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let default_path = std::env::var("PENGADAAN_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let args = match parse_args(std::env::args().skip(1), default_path) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let log_dir = std::env::var("PENGADAAN_LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    if let Err(e) = rolling_logger::init_logger(&log_dir, "Pengadaan") {
        eprintln!("[{}] Logging disabled: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
    }

    let repo = Arc::new(JsonFileSettingsRepository::new(&args.settings_path));
    let state = match MenuState::load(repo).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("failed to load {}: {}", args.settings_path.display(), e);
            eprintln!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = state.settings().await;
    println!("{} ({})", settings.app_title, args.role.as_str());
    print_nodes(&state.visible_menu(args.role).await, 0, &LucideIcons);

    log::info!("printed menu for {}", args.role.as_str());
    ExitCode::SUCCESS
}
