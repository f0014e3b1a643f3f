use shift_cipher::{alphabet, bellaso, caesar};

use proptest::prelude::*;

// Strategy for generating characters within the alphabet window
fn window_chars() -> impl Strategy<Value = char> {
    (b' '..=b'_').prop_map(char::from)
}

// Strategy for generating in-window text, including the empty string
fn window_text() -> impl Strategy<Value = String> {
    prop::collection::vec(window_chars(), 0..120).prop_map(|chars| chars.into_iter().collect())
}

// Strategy for generating valid (non-empty, in-window) keywords
fn keywords() -> impl Strategy<Value = String> {
    prop::collection::vec(window_chars(), 1..16).prop_map(|chars| chars.into_iter().collect())
}

// Strategy for generating characters outside the window
fn out_of_window_chars() -> impl Strategy<Value = char> {
    prop_oneof![
        (0x00u8..0x20).prop_map(char::from),
        (0x60u8..=0x7E).prop_map(char::from),
        Just('\u{E9}'),
        Just('\u{4E16}'),
    ]
}

// The classical formulation of the Caesar shift: one increment per key
// unit, wrapping from the top of the window back to the bottom. Kept here
// as an oracle for the modular implementation.
fn step_loop_caesar_encrypt(text: &str, key: i32) -> String {
    text.chars()
        .map(|c| {
            let mut code = c as u32;
            for _ in 0..key {
                if code >= alphabet::UPPER_BOUND as u32 {
                    code = alphabet::LOWER_BOUND as u32;
                } else {
                    code += 1;
                }
            }
            char::from_u32(code).unwrap()
        })
        .collect()
}

// Classical Caesar decryption: one decrement per key unit, wrapping from
// the bottom of the window back to the top.
fn step_loop_caesar_decrypt(text: &str, key: i32) -> String {
    text.chars()
        .map(|c| {
            let mut code = c as u32;
            for _ in 0..key {
                if code <= alphabet::LOWER_BOUND as u32 {
                    code = alphabet::UPPER_BOUND as u32;
                } else {
                    code -= 1;
                }
            }
            char::from_u32(code).unwrap()
        })
        .collect()
}

// The classical Bellaso reduction: repeatedly fold the raw code sum with
// `s - UPPER + LOWER - 1` until it lands inside the window.
fn fold_loop_bellaso_encrypt(text: &str, keyword: &str) -> String {
    let key: Vec<u32> = keyword.chars().map(|c| c as u32).collect();
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let mut code = c as u32 + key[i % key.len()];
            while code > alphabet::UPPER_BOUND as u32 {
                code = code - alphabet::UPPER_BOUND as u32 + alphabet::LOWER_BOUND as u32 - 1;
            }
            char::from_u32(code).unwrap()
        })
        .collect()
}

// Classical Bellaso decryption: subtract the keyword code, then add or
// subtract whole windows until the difference lands inside.
fn fold_loop_bellaso_decrypt(text: &str, keyword: &str) -> String {
    let key: Vec<i32> = keyword.chars().map(|c| c as i32).collect();
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let mut code = c as i32 - key[i % key.len()];
            while code < alphabet::LOWER_BOUND as i32 {
                code += alphabet::RANGE as i32;
            }
            while code > alphabet::UPPER_BOUND as i32 {
                code -= alphabet::RANGE as i32;
            }
            char::from_u32(code as u32).unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn test_caesar_round_trip(text in window_text(), key in any::<i32>()) {
        let encrypted = caesar::encrypt(&text, key).unwrap();
        let decrypted = caesar::decrypt(&encrypted, key).unwrap();
        prop_assert_eq!(text, decrypted);
    }

    #[test]
    fn test_caesar_closure_and_length(text in window_text(), key in any::<i32>()) {
        let encrypted = caesar::encrypt(&text, key).unwrap();
        prop_assert!(alphabet::is_in_bounds(&encrypted));
        prop_assert_eq!(encrypted.len(), text.len());
    }

    #[test]
    fn test_caesar_key_congruence(text in window_text(), key in any::<i32>()) {
        let reduced = key.rem_euclid(alphabet::RANGE as i32);
        prop_assert_eq!(
            caesar::encrypt(&text, key).unwrap(),
            caesar::encrypt(&text, reduced).unwrap()
        );
    }

    #[test]
    fn test_caesar_matches_step_loop(text in window_text(), key in 0..500i32) {
        prop_assert_eq!(
            caesar::encrypt(&text, key).unwrap(),
            step_loop_caesar_encrypt(&text, key)
        );
        prop_assert_eq!(
            caesar::decrypt(&text, key).unwrap(),
            step_loop_caesar_decrypt(&text, key)
        );
    }

    #[test]
    fn test_bellaso_round_trip(text in window_text(), keyword in keywords()) {
        let encrypted = bellaso::encrypt(&text, &keyword).unwrap();
        let decrypted = bellaso::decrypt(&encrypted, &keyword).unwrap();
        prop_assert_eq!(text, decrypted);
    }

    #[test]
    fn test_bellaso_closure_and_length(text in window_text(), keyword in keywords()) {
        let encrypted = bellaso::encrypt(&text, &keyword).unwrap();
        prop_assert!(alphabet::is_in_bounds(&encrypted));
        prop_assert_eq!(encrypted.len(), text.len());
    }

    #[test]
    fn test_bellaso_matches_fold_loop(text in window_text(), keyword in keywords()) {
        prop_assert_eq!(
            bellaso::encrypt(&text, &keyword).unwrap(),
            fold_loop_bellaso_encrypt(&text, &keyword)
        );
        prop_assert_eq!(
            bellaso::decrypt(&text, &keyword).unwrap(),
            fold_loop_bellaso_decrypt(&text, &keyword)
        );
    }

    #[test]
    fn test_bellaso_ciphertext_aligns_with_keyword_rotation(
        text in window_text(),
        keyword in keywords(),
    ) {
        // Repeating the keyword changes nothing: the key stream is the
        // same sequence either way.
        let doubled = format!("{}{}", keyword, keyword);
        prop_assert_eq!(
            bellaso::encrypt(&text, &keyword).unwrap(),
            bellaso::encrypt(&text, &doubled).unwrap()
        );
    }

    #[test]
    fn test_out_of_window_text_rejected_everywhere(
        text in window_text(),
        bad in out_of_window_chars(),
        index in any::<prop::sample::Index>(),
    ) {
        // Window characters are all single-byte, so any position up to
        // text.len() is a valid insertion boundary.
        let mut poisoned = text.clone();
        poisoned.insert(index.index(text.len() + 1), bad);

        prop_assert!(caesar::encrypt(&poisoned, 7).is_err());
        prop_assert!(caesar::decrypt(&poisoned, 7).is_err());
        prop_assert!(bellaso::encrypt(&poisoned, "KEY").is_err());
        prop_assert!(bellaso::decrypt(&poisoned, "KEY").is_err());
    }

    #[test]
    fn test_out_of_window_keyword_rejected(
        text in window_text(),
        keyword in keywords(),
        bad in out_of_window_chars(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut poisoned = keyword.clone();
        poisoned.insert(index.index(keyword.len() + 1), bad);

        prop_assert!(bellaso::encrypt(&text, &poisoned).is_err());
        prop_assert!(bellaso::decrypt(&text, &poisoned).is_err());
    }
}
