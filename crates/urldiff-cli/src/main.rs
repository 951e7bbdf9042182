use urldiff_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // diff(1) exit convention: 0 = same, 1 = different, 2 = trouble.
    match cli::run_from_args() {
        Ok(true) => std::process::exit(1),
        Ok(false) => {}
        Err(err) => {
            eprintln!("urldiff error: {:#}", err);
            std::process::exit(2);
        }
    }
}
