use flowword::{decode, encode};

fn main() {
    tracing_subscriber::fmt::init();

    let timestamp = 1618876800u64;
    let flow_rate = 1234000000000000000000u128;
    let deposit = 5678000000000000000000u128;
    let owed_deposit = 9012000000000000000000u128;

    let word = encode(timestamp, flow_rate, deposit, owed_deposit);
    let (recovered_timestamp, recovered_flow_rate, recovered_deposit, recovered_owed_deposit) =
        decode(word);

    println!("DATA PACKING");
    println!("timestamp:\t{timestamp}\t\t-> {recovered_timestamp}");
    println!("flow_rate:\t{flow_rate}\t-> {recovered_flow_rate}");
    println!("deposit:\t{deposit}\t-> {recovered_deposit}");
    println!("owed_deposit:\t{owed_deposit}\t-> {recovered_owed_deposit}");
    println!("\nfull encoded word:\t{word:#x}");
}
