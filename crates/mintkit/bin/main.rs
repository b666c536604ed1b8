//! The `mintkit` CLI.

fn main() {
    if let Err(err) = mintkit::args::run() {
        let _ = mintkit_common::sh_err!("{err:?}");
        std::process::exit(1);
    }
}
