use std::io::{self, BufRead, Write};

use base64_json_sync::SyncModel;
use base64_json_sync::frontend::{self, Command, Flow, HELP};
use base64_json_sync::logger::setup_logger;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let as_json = match args.get(1).map(String::as_str) {
        None => false,
        Some("--json") => true,
        Some(other) => {
            eprintln!("Unknown option: {other}");
            eprintln!("Usage: {} [--json]", args[0]);
            std::process::exit(1);
        }
    };

    setup_logger();

    let mut model = SyncModel::example();
    let _render = model.subscribe(move |m: &SyncModel| match frontend::render(m, as_json) {
        Ok(view) => println!("{view}"),
        Err(e) => log::error!("Cannot render state: {e}"),
    });

    println!("{}", frontend::render(&model, as_json)?);
    if !as_json {
        println!("{HELP}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Show => println!("{}", frontend::render(&model, as_json)?),
            Command::Help => println!("{HELP}"),
            command => {
                if frontend::apply(&mut model, command) == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
