//! procstack CLI - メニューインターフェース
//!
//! プロセスファイルを読み込み、呼び出しチェーンを表示・実行する対話メニュー

use anyhow::Result;
use clap::{ArgAction, Parser};
use procstack_sim::{
    parse_thread_choice, Command, Processor, ProcessorConfig, DEFAULT_DELIMITER, DEFAULT_THREADS,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// procstack - Process call chain simulator
#[derive(Parser)]
#[command(name = "procstack")]
#[command(version = "0.1.0")]
#[command(about = "Builds process call chains from a delimited file and reports their timings", long_about = None)]
struct Cli {
    /// Path to the process file
    file: PathBuf,

    /// Number of threads to build (one per leading record)
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Field delimiter used in the process file
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// メニュー1回分の処理結果
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ProcessorConfig {
        threads: cli.threads,
        delimiter: cli.delimiter,
    };
    let mut processor = Processor::load(&cli.file, &config)?;
    info!(
        "Ready: {} processes, {} threads from {}",
        processor.processes().len(),
        processor.thread_count(),
        cli.file.display()
    );

    println!("Welcome to procstack");
    println!();

    run_menu(&mut processor)?;

    println!("Thank you for using procstack!");
    Ok(())
}

/// ログ出力を初期化する（RUST_LOG が優先）
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// メニューループを実行する
fn run_menu(processor: &mut Processor) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        print_menu();

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line)?;

        match handle_command(&mut rl, processor, line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn handle_command(rl: &mut DefaultEditor, processor: &mut Processor, line: &str) -> Result<Flow> {
    match Command::parse(line) {
        Some(Command::DisplayThread(Some(number))) => handle_display(processor, number)?,
        Some(Command::DisplayThread(None)) => {
            if let Some(number) = choose_thread(rl, processor)? {
                handle_display(processor, number)?;
            }
        }
        Some(Command::StartThreads) => handle_start(processor),
        Some(Command::ListThreads) => list_threads(processor),
        Some(Command::Processes) => handle_processes(processor),
        Some(Command::Help) => print_help(),
        Some(Command::Quit) => return Ok(Flow::Quit),
        None => println!("Please enter a valid option."),
    }

    Ok(Flow::Continue)
}

/// 表示するスレッドを選ばせる（有効な番号が入力されるまで繰り返す）
fn choose_thread(rl: &mut DefaultEditor, processor: &Processor) -> Result<Option<usize>> {
    if processor.thread_count() == 0 {
        println!("There are no threads to view.");
        return Ok(None);
    }

    loop {
        println!("What thread would you like to view?");
        list_threads(processor);

        match rl.readline("> ") {
            Ok(input) => {
                if let Some(number) = parse_thread_choice(&input, processor.thread_count()) {
                    return Ok(Some(number));
                }
                println!("Please enter a valid option.");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// スレッドの内容を先頭から表示する
fn handle_display(processor: &Processor, number: usize) -> Result<()> {
    let thread = processor.thread(number)?;
    println!("Thread {}", number);

    if thread.is_empty() {
        println!("This thread is empty.");
        return Ok(());
    }

    for i in 0..thread.len() {
        println!("{}", thread.at(i)?);
    }
    Ok(())
}

/// 全スレッドを実行して合計時間を表示する
fn handle_start(processor: &mut Processor) {
    for report in processor.start_threads() {
        println!(
            "Thread {} took {} milliseconds to complete",
            report.number, report.total_duration
        );
    }
}

fn list_threads(processor: &Processor) {
    for summary in processor.list_threads() {
        println!("Thread {} ({} processes)", summary.number, summary.size);
    }
}

fn handle_processes(processor: &Processor) {
    for process in processor.processes() {
        println!("{}", process);
    }
}

fn print_menu() {
    println!("Choose an option.");
    println!("1. Display Threads");
    println!("2. Start Threads");
    println!("3. Quit");
}

fn print_help() {
    println!("Available commands:");
    println!();
    println!("  1 / display    - Choose a thread and show its processes");
    println!("  show <n>       - Show the processes of thread <n>");
    println!("  2 / start      - Run every thread and report total durations");
    println!("  3 / quit       - Exit");
    println!("  list (ls)      - Show the number of processes in each thread");
    println!("  processes (ps) - Show every loaded process");
    println!("  help           - Show this help message");
}
