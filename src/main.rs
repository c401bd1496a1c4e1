//! Letter Mash CLI
//!
//! Interactive command-line interface for the letter-mash word finder.

use letter_mash::{loader, Dictionary, Finder, Grid, RankedWord, DEFAULT_TOP_N};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Env var naming a JSON word list to use instead of the embedded one.
const DICTIONARY_ENV: &str = "LETTER_MASH_DICTIONARY";

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stdout = io::stdout();
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        Self { running, handle: Some(handle) }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn load_dictionary() -> letter_mash::Result<Dictionary> {
    match std::env::var_os(DICTIONARY_ENV) {
        Some(path) => loader::load_from_path(&PathBuf::from(path)),
        None => letter_mash::load_dictionary(),
    }
}

/// Starts loading the dictionary on its own thread so the banner shows up
/// straight away.
fn spawn_dictionary_loader() -> JoinHandle<letter_mash::Result<Dictionary>> {
    thread::spawn(load_dictionary)
}

fn wait_for_dictionary(handle: JoinHandle<letter_mash::Result<Dictionary>>) -> Option<Dictionary> {
    let spinner = Spinner::new("Loading dictionary...");
    let result = handle.join();
    spinner.stop();

    match result {
        Ok(Ok(dictionary)) => {
            println!("OK -> Dictionary loaded successfully! ({} words)", dictionary.len());
            Some(dictionary)
        }
        Ok(Err(err)) => {
            eprintln!("File Error -> {}", err);
            None
        }
        Err(_) => {
            eprintln!("File Error -> Failed to load dictionary");
            None
        }
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(4) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_results(results: &[RankedWord]) {
    if results.is_empty() {
        println!("No words found!");
        return;
    }
    for ranked in results {
        let path: Vec<String> = ranked.path.iter().map(|p| p.to_string()).collect();
        println!("Word: {} - Point: {} - Path: {}", ranked.word, ranked.score, path.join(" -> "));
    }
}

fn run_interactive() -> io::Result<()> {
    let loading = spawn_dictionary_loader();
    print_banner();
    println!();

    let Some(dictionary) = wait_for_dictionary(loading) else {
        std::process::exit(1);
    };
    let finder = Finder::new(&dictionary);
    println!("Type 'help' for commands.");
    println!();

    let mut top_n = DEFAULT_TOP_N;
    let mut cell_filter: Option<String> = None;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("Enter your Persian letters separated by a space or insert 'e' to exit:");
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts[0].to_lowercase().as_str() {
            "e" | "exit" | "quit" => {
                println!();
                println!("Bye!");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "top" | "t" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(n) => {
                    top_n = n;
                    println!("Showing the top {} words.", top_n);
                }
                None => println!("Usage: top <n>"),
            },
            "cell" | "c" => {
                cell_filter = parts.get(1).map(|s| s.to_string());
                match &cell_filter {
                    Some(cell) => println!("Only words through cell {}.", cell),
                    None => println!("Cell filter cleared."),
                }
            }
            _ => match Grid::parse(line) {
                Ok(grid) => {
                    let results = finder.find_top_words(&grid, top_n, cell_filter.as_deref());
                    print_results(&results);
                }
                Err(err) => println!("Letters Error -> {}", err),
            },
        }
        println!("{}", "=".repeat(50));
    }

    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "find" => {
                if args.len() < 3 {
                    eprintln!("Usage: letter-mash find \"<letters>\" [cell]");
                    std::process::exit(1);
                }

                let grid = match Grid::parse(&args[2]) {
                    Ok(grid) => grid,
                    Err(err) => {
                        eprintln!("Letters Error -> {}", err);
                        std::process::exit(1);
                    }
                };

                let Some(dictionary) = wait_for_dictionary(spawn_dictionary_loader()) else {
                    std::process::exit(1);
                };

                println!("{}", grid);
                println!();
                let results = Finder::new(&dictionary).find_top_words(
                    &grid,
                    DEFAULT_TOP_N,
                    args.get(3).map(String::as_str),
                );
                print_results(&results);
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
        Ok(())
    } else {
        run_interactive()
    }
}
