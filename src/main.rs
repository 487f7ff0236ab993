use slop::commands::execute_select;
use slop::core::{
    engine::EngineProvider,
    options::SelectArgs,
    print_error,
};
use std::io::{self, Write};

fn run() -> i32 {
    let args = match SelectArgs::from_command_line(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            print_error(&e.to_string());
            return 1;
        }
    };

    // Configure logging based on --debug flag; RUST_LOG still takes precedence
    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut provider = EngineProvider::from_environment();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    let result = execute_select(args, &mut provider, &mut out, &mut err).and_then(|code| {
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string());
            1
        }
    }
}

fn main() {
    std::process::exit(run());
}
