use nhflib::convert::convert;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // cargo run -p nhflib --example convert < report.csv > ledger.csv
    let summary = convert(std::io::stdin().lock(), std::io::stdout().lock())?;
    eprintln!("{summary:?}");
    Ok(())
}
