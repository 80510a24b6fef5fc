use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use corvus::{init_tracing, lexer::lexer::tokenize, render_error};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <source file>", args.first().map(String::as_str).unwrap_or("corvus"));
        process::exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {}: {}", file_path.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    match tokenize(file_contents.clone(), Some(file_name)) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", token);
            }
            eprintln!("Tokenized in {:?}", start.elapsed());
        }
        Err(error) => {
            eprint!("{}", render_error(&error, &file_contents));
            process::exit(1);
        }
    }
}
