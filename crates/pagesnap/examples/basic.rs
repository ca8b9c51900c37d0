// Basic capture example
//
// Run with:
// cargo run --package pagesnap --example basic

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::temp_dir().join("pagesnap_example.png");

    pagesnap::capture("https://example.com", &output).await?;
    println!("✓ Screenshot saved to: {}", output.display());

    Ok(())
}
