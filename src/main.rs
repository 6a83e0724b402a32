use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use basil::{
    format_error, interpreter::interpreter::Interpreter, lexer::lexer::tokenize,
    parser::parser::parse,
};

const USAGE: &str = "usage: basil <script> [--ast] [--no-dump]";

struct Options {
    path: PathBuf,
    /// Print the parsed tree before running
    show_ast: bool,
    /// Print the final stack and heap after running
    dump_memory: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut path = None;
    let mut show_ast = false;
    let mut dump_memory = true;

    for arg in args {
        match arg.as_str() {
            "--ast" => show_ast = true,
            "--no-dump" => dump_memory = false,
            "-h" | "--help" => return Err(String::from(USAGE)),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag `{}`\n{}", flag, USAGE))
            }
            _ if path.is_some() => return Err(format!("only one script is supported\n{}", USAGE)),
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    Ok(Options {
        path: path.ok_or_else(|| String::from(USAGE))?,
        show_ast,
        dump_memory,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    let file_name = options.path.to_string_lossy().to_string();
    let source = match read_to_string(&options.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_name, e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);
    log::info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };
    log::info!("Parsed in {:?}", parse_start.elapsed());

    if options.show_ast {
        print!("{}", program);
    }

    let eval_start = Instant::now();
    let mut interpreter = Interpreter::new();
    if let Err(error) = interpreter.evaluate(&program) {
        eprint!("{}", format_error(&error, &source, &file_name));
        return ExitCode::FAILURE;
    }
    log::info!("Evaluated in {:?}", eval_start.elapsed());
    log::info!("Total time: {:?}", start.elapsed());

    if options.dump_memory {
        print!("{}", interpreter.memory());
    }

    ExitCode::SUCCESS
}
