use std::{fs, process, thread, time::Duration};

mod console;
mod options;
mod stats;

use anyhow::Context;
use hexlife::{Automaton, Board, BoardCodec, PlainText};

fn args_to_board(args: &options::Args) -> anyhow::Result<Board> {
    if let Some(path) = args.input_file() {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        let board = PlainText
            .decode(&text)
            .with_context(|| format!("malformed board file {}", path.display()))?;
        return Ok(board);
    }

    let size = args.size()?;
    let prob = args.probability()?;
    Ok(Board::random(size, size, prob, &mut rand::rng()))
}

fn run(args: &options::Args) -> anyhow::Result<()> {
    let topology = args.topology()?;
    let generations = args.generations()?;
    let print_every = args.print_every()?;
    let board = args_to_board(args)?;

    let mut automaton = Automaton::new(board, topology);
    let mut stats = stats::RunRecord::new(automaton.board().alive_count());

    if args.no_clear() {
        // movie mode: frames scroll past instead of redrawing in place
        println!("Gen 0");
        print!("{}", console::frame(automaton.board(), topology));
        for generation in 1..=generations {
            automaton.step();
            stats.record(automaton.board().alive_count());
            if generation % print_every == 0 {
                println!("Gen {generation}");
                print!("{}", console::frame(automaton.board(), topology));
            }
        }
    } else {
        let mut view = console::ConsoleView::new()?;
        view.render(&automaton)?;
        thread::sleep(Duration::from_millis(100));
        'generations: for generation in 1..=generations {
            while let Some(cmd) = view.poll_events()? {
                if matches!(cmd, console::ConsoleCommand::Exit) {
                    break 'generations;
                }
            }
            automaton.step();
            stats.record(automaton.board().alive_count());
            if generation % print_every == 0 {
                view.render(&automaton)?;
                thread::sleep(Duration::from_millis(100));
            }
        }
    }

    println!("{}", stats.summary());
    Ok(())
}

fn main() {
    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
