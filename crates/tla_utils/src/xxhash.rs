use xxhash_rust::xxh3::{xxh3_128, xxh3_128_with_seed};

// Fixed so that the same source text always yields the same chain.
const CHAIN_SEED: u64 = 0x7976_c25e_8279_4241;

/// A one-way hash chain seeded by some text, used to mint identifiers that
/// are stable across runs but practically never clash with names written by hand.
#[derive(Debug, Clone)]
pub struct RandomIdentifierGenerator {
  state: u128,
}

impl RandomIdentifierGenerator {
  pub fn new(seed: &str) -> Self {
    Self { state: xxh3_128_with_seed(seed.as_bytes(), CHAIN_SEED) }
  }

  /// Advance the chain and return the identifier for the new state.
  pub fn generate(&mut self) -> String {
    self.state = xxh3_128(&self.state.to_le_bytes());
    format!("var_{:032x}", self.state)
  }
}

#[test]
fn test_random_identifier_generator() {
  let mut a = RandomIdentifierGenerator::new("export default 1;");
  let mut b = RandomIdentifierGenerator::new("export default 1;");
  let first = a.generate();
  assert_eq!(first, b.generate());
  assert_eq!(first.len(), "var_".len() + 32);
  assert!(crate::ecmascript::is_validate_identifier_name(&first));

  let second = a.generate();
  assert_ne!(first, second);
  assert_eq!(second, b.generate());

  let mut c = RandomIdentifierGenerator::new("export default 2;");
  assert_ne!(first, c.generate());
}
