use std::process;

fn main() {
    process::exit(elz::cli::run());
}
