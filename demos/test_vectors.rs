use serde::Serialize;
use scalar_siphash::{key_from_bytes, sip_hash24};

const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";
const TEST_VECTOR_LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 63];
const TEST_VECTOR_OUTPUT_FILE: &str = "test_vectors/sip_hash24.json";

#[derive(Serialize)]
struct TestVector {
    input: String,
    digest: String,
}

#[derive(Serialize)]
struct Fixture {
    key: String,
    vectors: Vec<TestVector>,
}

fn main() {
    println!("Generating test vectors...");
    let key = key_from_bytes(&hex::decode(KEY_HEX).expect("key hex")).expect("16-byte key");
    let vectors = TEST_VECTOR_LENGTHS
        .iter()
        .map(|&len| {
            let input: Vec<u8> = (0..len as u8).collect();
            TestVector {
                input: hex::encode(&input),
                digest: format!("{:016x}", sip_hash24(&key, &input)),
            }
        })
        .collect::<Vec<_>>();
    let fixture = Fixture {
        key: KEY_HEX.to_string(),
        vectors,
    };
    // Convert the test vectors to a json object, pretty print it
    let json = serde_json::to_string_pretty(&fixture).unwrap();
    println!("{}", json);
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, json).unwrap();
    println!("Test vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
}
