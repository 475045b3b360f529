use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use numlist::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::Parser,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (source, file_name) = match args.len() {
        1 => match read_until_blank_line() {
            Ok(source) => (source, String::from("shell")),
            Err(error) => {
                eprintln!("Failed to read stdin: {}", error);
                return ExitCode::FAILURE;
            }
        },
        2 => {
            let file_path = PathBuf::from(&args[1]);
            let file_name = file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| args[1].clone());

            match read_to_string(&file_path) {
                Ok(source) => (source, file_name),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path.display(), error);
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => {
            eprintln!("Usage: {} [source-file]", args[0]);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());
    println!("\nTOKENS:");
    for token in tokens.iter() {
        println!("  {}", token);
    }

    let parse_start = Instant::now();
    let mut parser = Parser::new(tokens, Rc::new(file_name.clone()));
    let program = parser.parse_program();

    println!("\nParsed in {:?}", parse_start.elapsed());

    match program {
        Ok(program) => {
            println!("\nPARSE TREE:");
            println!("{}", pretty_print(program.to_string()));
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source, &file_name);
            ExitCode::FAILURE
        }
    }
}

fn read_until_blank_line() -> io::Result<String> {
    println!("Enter your code (end with a blank line):");

    let mut lines = vec![];
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}

fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        Error: name (tip)
        -> input.nl
           |
        20 | let list = [5, 8, # 12];
           | ------------------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        println!("   | {}", error);
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
