fn main() {
    if let Err(e) = storefront::run(std::env::args().skip(1)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
