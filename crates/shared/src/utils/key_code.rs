use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

const KEY_CHARACTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const GROUP_LEN: usize = 5;
const GROUP_COUNT: usize = 5;

/// Generates a product key in the `XXXXX-XXXXX-XXXXX-XXXXX-XXXXX` shape.
/// The alphabet skips ambiguous glyphs (I, O, 0, 1) since customers retype
/// these by hand.
pub fn generate_key_code() -> Result<String> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    let mut rng = StdRng::from_seed(seed);

    let groups: Vec<String> = (0..GROUP_COUNT)
        .map(|_| {
            (0..GROUP_LEN)
                .map(|_| {
                    let idx = rng.random_range(0..KEY_CHARACTERS.len());
                    KEY_CHARACTERS[idx] as char
                })
                .collect()
        })
        .collect();

    Ok(groups.join("-"))
}
