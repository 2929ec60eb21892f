//! Writes two blocks, verifies the chain and prints it as JSON.

use anyhow::{bail, Result};
use hashchain::Chain;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut chain = Chain::new();
    chain.write("foo");
    chain.write("bar");

    if !chain.verify() {
        bail!("blockchain verification failure");
    }

    print!("{}", chain.to_json()?);
    Ok(())
}
