use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use libarabic::{
    create_keyboard, ArabicConfig, ArabicKeyboard, ArabicLayout, DeleteGranularity, DisplayMode,
    KeyEvent, KeyResult, Layout,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libarabic")]
#[command(about = "Arabic virtual keyboard: type QWERTY keys, get Arabic text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start with the Latin buffer visible
    #[arg(long, global = true)]
    latin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive keyboard session
    Repl,
    /// Show the key table row by row
    Layout,
    /// List the diacritical marks
    Marks,
    /// Convert Latin text to Arabic in one go
    Translit {
        /// Text to convert
        text: String,

        /// Convert Arabic back to the Latin keys that type it
        #[arg(short, long)]
        reverse: bool,
    },
}

const HELP: &str = "\
Type keys and press Return to send them to the keyboard.
Commands:
  :back            delete the last character of each buffer
  :enter           insert a newline
  :space           insert a space
  :clear           clear both buffers
  :toggle          switch between Arabic and Latin display
  :granularity [g] show or set delete granularity (unit or char)
  :mark <m>        add a diacritic by name or shortcut (e.g. :mark F)
  :tap <label>     tap an on-screen key (e.g. :tap -)
  :print [path]    write the visible text to stdout or a file
  :show            show both buffers
  :help            this text
  :quit            leave";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ArabicConfig> {
    let mut config = match &cli.config {
        Some(path) => ArabicConfig::load_toml(path)?,
        None => ArabicConfig::default(),
    };
    if cli.latin {
        config.base_mut().display_mode = DisplayMode::Latin;
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn print_layout(config: &ArabicConfig) {
    let layout = ArabicLayout;
    for row in layout.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cap| {
                if config.show_glyphs {
                    format!("{}={}", cap.latin, cap.glyph)
                } else {
                    cap.latin.to_string()
                }
            })
            .collect();
        println!("{}", cells.join("  "));
    }
    println!("({} mapped keys; space maps to itself)", layout.key_count());
}

fn print_marks(config: &ArabicConfig) {
    for (i, mark) in ArabicLayout.diacritics().iter().enumerate() {
        if config.show_shortcuts {
            println!("{}. {} [{}] \u{25CC}{}", i + 1, mark.name, mark.shortcut, mark.glyph);
        } else {
            println!("{}. {} \u{25CC}{}", i + 1, mark.name, mark.glyph);
        }
    }
}

fn show_state(kb: &ArabicKeyboard) {
    let ctx = kb.context();
    let label = match ctx.display_mode {
        DisplayMode::Native => "arabic",
        DisplayMode::Latin => "latin",
    };
    println!("[{} {}] {}", label, ctx.direction.as_str(), ctx.visible_text);
}

fn export_visible(kb: &ArabicKeyboard, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            kb.export(BufWriter::new(file))?;
            println!("wrote {}", path.display());
        }
        None => kb.export(io::stdout().lock())?,
    }
    Ok(())
}

/// Outcome of one REPL line.
enum Step {
    Continue,
    Quit,
}

fn run_command(kb: &mut ArabicKeyboard, command: &str, arg: &str) -> anyhow::Result<Step> {
    match command {
        "back" => {
            kb.process_key(KeyEvent::Backspace);
        }
        "enter" => {
            kb.process_key(KeyEvent::Enter);
        }
        "space" => {
            kb.process_key(KeyEvent::Space);
        }
        "clear" => {
            kb.process_key(KeyEvent::Clear);
        }
        "toggle" => {
            kb.process_key(KeyEvent::ToggleDisplay);
        }
        "granularity" => {
            match arg {
                "" => {}
                "unit" => kb.set_delete_granularity(DeleteGranularity::Unit),
                "char" => kb.set_delete_granularity(DeleteGranularity::Char),
                other => println!("unknown granularity '{}' (use unit or char)", other),
            }
            let name = match kb.composer().granularity() {
                DeleteGranularity::Unit => "unit",
                DeleteGranularity::Char => "char",
            };
            println!("delete granularity: {}", name);
            return Ok(Step::Continue);
        }
        "mark" => match kb.layout().find_diacritic(arg) {
            Some(mark) => {
                kb.process_key(KeyEvent::Mark(mark.glyph));
            }
            None => println!("unknown mark '{}' (see `libarabic marks`)", arg),
        },
        "tap" => match kb.layout().find_keycap(arg) {
            Some(cap) => {
                kb.process_key(KeyEvent::Tap(*cap));
            }
            None => println!("no on-screen key labelled '{}'", arg),
        },
        "print" => {
            let path = (!arg.is_empty()).then(|| Path::new(arg));
            export_visible(kb, path)?;
            return Ok(Step::Continue);
        }
        "show" => {
            let ctx = kb.context();
            println!("arabic: {:?}", ctx.native_text);
            println!("latin:  {:?}", ctx.latin_text);
            return Ok(Step::Continue);
        }
        "help" => {
            println!("{}", HELP);
            return Ok(Step::Continue);
        }
        "quit" | "q" => return Ok(Step::Quit),
        other => {
            println!("unknown command ':{}' (try :help)", other);
            return Ok(Step::Continue);
        }
    }
    show_state(kb);
    Ok(Step::Continue)
}

fn run_line(kb: &mut ArabicKeyboard, line: &str) -> anyhow::Result<Step> {
    if let Some(rest) = line.strip_prefix(':') {
        let (command, arg) = rest.split_once(' ').unwrap_or((rest, ""));
        return run_command(kb, command.trim(), arg.trim());
    }

    let mut ignored = String::new();
    for ch in line.chars() {
        if kb.process_key(KeyEvent::Char(ch)) == KeyResult::NotHandled {
            ignored.push(ch);
        }
    }
    if !ignored.is_empty() {
        println!("  (ignored unmapped keys: {})", ignored);
    }
    show_state(kb);
    Ok(Step::Continue)
}

fn run_repl(config: &ArabicConfig) -> anyhow::Result<()> {
    let mut kb = create_keyboard(config);

    println!("libarabic keyboard: type Latin keys and press Enter");
    println!("Example: hj → ات   (:help for commands, Ctrl-D to exit)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        if line.is_empty() {
            continue;
        }
        if let Step::Quit = run_line(&mut kb, &line)? {
            break;
        }
        io::stdout().flush().ok();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Layout) => print_layout(&config),
        Some(Commands::Marks) => print_marks(&config),
        Some(Commands::Translit { text, reverse }) => {
            if reverse {
                println!("{}", ArabicLayout.reverse_transliterate(&text));
            } else {
                println!("{}", ArabicLayout.transliterate(&text));
            }
        }
        Some(Commands::Repl) | None => run_repl(&config)?,
    }
    Ok(())
}
