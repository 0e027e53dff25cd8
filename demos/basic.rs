use scalar_siphash::{key_from_bytes, reduce_sip_tree_hash, sip_hash, sip_hash24};

fn main() {
    let key = key_from_bytes(&(0u8..16).collect::<Vec<_>>()).expect("16-byte key");

    let input = "Hello, world!";
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("SipHash (zero-padded): {:016x}", sip_hash(&key, input.as_bytes()));
    println!("SipHash-2-4:           {:016x}", sip_hash24(&key, input.as_bytes()));

    let lanes = [
        sip_hash(&key, b"lane 0"),
        sip_hash(&key, b"lane 1"),
        sip_hash(&key, b"lane 2"),
        sip_hash(&key, b"lane 3"),
    ];
    println!("Lanes: {:016x?}", lanes);
    println!("Tree hash: {:016x}", reduce_sip_tree_hash(&key, &lanes));
}
