use std::{env, fs::read_to_string, process::exit, time::Instant};

use qbe_lang::{diagnostics::diagnostics::ConsoleSink, scanner::scanner::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let mut sink = ConsoleSink::new();
    let tokens = tokenize(file_contents, &mut sink);

    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    if sink.reported() > 0 {
        println!("Scanning finished with {} error(s)", sink.reported());
        exit(1);
    }
}
