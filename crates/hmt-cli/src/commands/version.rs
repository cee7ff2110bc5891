use anyhow::Result;

pub fn run() -> Result<()> {
    println!("hmt {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
