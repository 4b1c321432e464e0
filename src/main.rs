use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use potty_run::app::App;
use potty_run::build_info;
use potty_run::core::config::GameConfig;
use potty_run::core::constants::INPUT_POLL_MS;
use potty_run::input::map_key;
use potty_run::ui::draw_ui;
use potty_run::utils::persistence::{self, LOG_FILE_NAME};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "potty-run")]
#[command(about = "Jump over toilets while your paid break ticks away")]
#[command(version = build_info::VERSION_LINE)]
struct Cli {
    /// Game config JSON (defaults to ~/.potty-run/config.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Monthly salary used for the break earnings
    #[arg(long)]
    salary: Option<f64>,
    /// Seed obstacle generation for a repeatable run
    #[arg(long)]
    seed: Option<u64>,
    /// Log file (defaults to ~/.potty-run/potty-run.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;
    log::info!(
        "potty-run {} ({}) starting",
        build_info::BUILD_DATE,
        build_info::BUILD_COMMIT
    );

    let config = GameConfig::load(cli.config.as_deref())?;
    let salary = cli.salary.unwrap_or(config.monthly_salary);
    let rng = match cli.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(config, salary, rng, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal loop failed: {}", e);
    }
    result?;

    log::info!("best score this run: {}", app.scores.best);
    println!("Back to work!");
    Ok(())
}

/// Draw, wait for input until the next tick is due, then step the game.
fn run(terminal: &mut Tui, app: &mut App<StdRng>) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app, Instant::now()))?;

        let timeout = app
            .driver
            .time_until_next_tick()
            .max(Duration::from_millis(INPUT_POLL_MS));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    app.handle_action(action, Instant::now());
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

/// Route `log` records to a file; the terminal belongs to the UI.
fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => persistence::data_path(LOG_FILE_NAME)?,
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
