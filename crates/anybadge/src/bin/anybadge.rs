fn main() {
    if let Err(err) = anybadge::run() {
        eprintln!("{}", anybadge::format_error(&err));
        std::process::exit(1);
    }
}
