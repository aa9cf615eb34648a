fn main() {
    if let Err(err) = reading_list_md::run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
