fn main() {
    #[cfg(feature = "cli")]
    charpack88::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("charpack88: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
