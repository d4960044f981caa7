use seqcommit_canonical::{RawCommitmentBuilder, U256};

fn main() {
    let mut amount = U256::new();
    amount.set_uint64(42);

    let inner = RawCommitmentBuilder::new("PAYLOAD")
        .var_size_field("data", b"hello")
        .finalize();

    let commitment = RawCommitmentBuilder::new("EXAMPLE")
        .u64_field("height", 7)
        .u256_field("amount", &amount)
        .field("payload", inner)
        .finalize();

    println!("amount     {}", amount);
    println!("payload    {}", inner);
    println!("commitment {}", commitment);
}
