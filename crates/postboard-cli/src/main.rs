mod cli;
mod modes;

fn main() {
    if let Err(e) = cli::run() {
        // Action failures display only their fixed notice.
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
