fn main() {
    if let Err(err) = anybadge_server::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
