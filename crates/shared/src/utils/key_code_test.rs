use super::key_code::generate_key_code;

#[test]
fn key_code_has_five_groups_of_five() {
    let code = generate_key_code().expect("generation");

    let groups: Vec<&str> = code.split('-').collect();
    assert_eq!(groups.len(), 5);
    for group in groups {
        assert_eq!(group.len(), 5);
    }
}

#[test]
fn key_code_skips_ambiguous_glyphs() {
    for _ in 0..20 {
        let code = generate_key_code().expect("generation");
        for ch in code.chars().filter(|c| *c != '-') {
            assert!(
                ch.is_ascii_uppercase() || ch.is_ascii_digit(),
                "unexpected char {ch} in {code}"
            );
            assert!(!"IO01".contains(ch), "ambiguous char {ch} in {code}");
        }
    }
}

#[test]
fn key_codes_are_unique_in_practice() {
    let a = generate_key_code().expect("generation");
    let b = generate_key_code().expect("generation");
    assert_ne!(a, b);
}
