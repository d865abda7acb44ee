use std::process;

fn main() {
    match paper_split_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("paper-split error: {err}");
            process::exit(1);
        }
    }
}
