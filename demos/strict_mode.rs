use flowword::{FlowData, FlowWordCodec, FlowWordConfig};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let data = FlowData::new(
        1618876800,
        1_000_000_000_000_000_000,
        14_400_000_000_000_000_000_000,
        0,
    );

    let codec = FlowWordCodec::with_config(FlowWordConfig::builder().strict().build());
    let word = match codec.pack_data(&data) {
        Ok(word) => word,
        Err(err) => {
            eprintln!("Cannot pack: {err}");
            return;
        }
    };

    let recovered = codec.unpack(word);
    println!("Packed word: {word:#x}");
    if let Some(datetime) = recovered.datetime() {
        println!("  Updated at: {datetime}");
    }
    println!("  Flow rate: {}", recovered.flow_rate);
    println!(
        "  Deposit: {} (lost {} to truncation)",
        recovered.deposit,
        data.deposit - recovered.deposit
    );

    // Flow rate wider than 96 bits would land in the timestamp field
    match codec.pack(1618876800, 1u128 << 100, 0, 0) {
        Ok(word) => println!("Unexpectedly packed {word:#x}"),
        Err(err) => println!("Rejected: {err}"),
    }
}
