// callviz: step-by-step call stack visualizer

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use callviz::collections::CallStack;
use callviz::events::EventLog;
use callviz::interpreter::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_STEPS};
use callviz::interpreter::program::{Program, StackFactory};
use callviz::ui::app::{App, AppConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Step through a program and watch its call stack")]
struct Cli {
    /// Program source file
    file: PathBuf,

    /// Run the entry method on its own, without a call stack
    #[arg(long)]
    no_call_stack: bool,

    /// Run to completion and print every event instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Maximum steps for headless runs and the run-to-end key
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Auto-play delay between steps, in milliseconds
    #[arg(long, default_value_t = 1000)]
    play_interval: u64,

    /// Number of events kept in history
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let stack: Option<StackFactory> = if cli.no_call_stack {
        eprintln!("Call stack disabled, method calls won't run.");
        None
    } else {
        Some(CallStack::new)
    };

    let events = EventLog::shared(cli.history);

    eprintln!("Parsing {}...", cli.file.display());
    let program = match Program::from_file(&cli.file, events.clone(), stack) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!(
        "Parsed successfully. Found {} method(s).",
        program.methods().len()
    );

    if cli.headless {
        run_headless(program, &events, cli.max_steps);
        return Ok(());
    }

    // Keep the source for the source pane
    let source = std::fs::read_to_string(&cli.file)?;
    let config = AppConfig {
        play_interval: Duration::from_millis(cli.play_interval),
        max_steps: cli.max_steps,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(program, events, source, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Step to completion (or the step cap) and print the recorded events
fn run_headless(mut program: Program, events: &RefCell<EventLog>, max_steps: usize) {
    let steps = program.run(max_steps);
    for event in events.borrow().events() {
        println!("{}", event);
    }
    if program.is_finished() {
        eprintln!("Finished after {} step(s).", steps);
    } else {
        eprintln!("Stopped after {} step(s); program still running.", steps);
    }
}
