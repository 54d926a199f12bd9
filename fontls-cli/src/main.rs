//! Binary entrypoint for fontls-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontls_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
