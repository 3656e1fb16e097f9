use std::path::PathBuf;

use brush_tooltip::app::{App, handle_key, handle_mouse};
use brush_tooltip::config::{ConfigResult, load_config, load_config_from_path};
use brush_tooltip::tooltip::AttachMode;
use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

/// Drag across an axis to select a range; a tooltip follows the pointer
#[derive(Parser, Debug)]
#[command(name = "brush-tooltip", version, about)]
struct Cli {
    /// Config file to use instead of ~/.config/brush-tooltip/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds the tooltip stays open after the pointer leaves
    #[arg(long)]
    hide_delay: Option<u64>,

    /// What attaching a second tooltip to the same label does
    #[arg(long, value_enum)]
    attach_mode: Option<AttachArg>,

    /// Value at the left end of the axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    min: f64,

    /// Value at the right end of the axis
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    max: f64,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AttachArg {
    Replace,
    Cumulative,
}

impl From<AttachArg> for AttachMode {
    fn from(arg: AttachArg) -> Self {
        match arg {
            AttachArg::Replace => AttachMode::Replace,
            AttachArg::Cumulative => AttachMode::Cumulative,
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(delay) = cli.hide_delay {
        config.tooltip.hide_delay_ms = delay;
    }
    if let Some(mode) = cli.attach_mode {
        config.tooltip.attach_mode = mode.into();
    }
    config.validate()?;

    if cli.print_config {
        if let Some(warning) = &warning {
            eprintln!("warning: {warning}");
        }
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    #[cfg(debug_assertions)]
    init_logging();

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &cli, &config, warning);

    // Restore terminal even if the loop failed
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(
    mut terminal: DefaultTerminal,
    cli: &Cli,
    config: &brush_tooltip::config::Config,
    warning: Option<String>,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config, Rect::new(0, 0, size.width, size.height), (cli.min, cli.max));
    app.status = warning;

    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    log::debug!("exiting");
    Ok(())
}

/// Debug builds log to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("brush-tooltip")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("debug.log")) else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
