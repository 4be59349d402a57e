//! Uniform pick from a list of names

use crate::error::{CoreError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split a comma-separated argument into trimmed, non-empty names
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Pick one name uniformly at random
///
/// Names are trimmed and blank entries ignored. At least two usable names
/// are required.
pub fn choice<S, R>(names: &[S], rng: &mut R) -> Result<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<&str> = names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .collect();

    if candidates.len() < 2 {
        return Err(CoreError::InsufficientInput {
            found: candidates.len(),
        });
    }

    let chosen = candidates
        .choose(rng)
        .ok_or(CoreError::InsufficientInput { found: 0 })?;
    log::info!("chose {chosen:?} from {} names", candidates.len());
    Ok(chosen.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            parse_names("John, Bob, ,Juan,  Roman  ,"),
            vec!["John", "Bob", "Juan", "Roman"]
        );
        assert!(parse_names(" , ,").is_empty());
    }

    #[test]
    fn test_choice_roughly_uniform() {
        let names = ["Bob", "Alice"];
        let mut rng = StdRng::seed_from_u64(2024);
        let mut bob = 0;
        let trials = 2000;

        for _ in 0..trials {
            match choice(&names, &mut rng).unwrap().as_str() {
                "Bob" => bob += 1,
                "Alice" => {}
                other => panic!("unexpected name {other}"),
            }
        }

        assert!(bob > trials * 2 / 5 && bob < trials * 3 / 5, "bob = {bob}");
    }

    #[test]
    fn test_choice_trims_names() {
        let names = ["  Bob ", "\tBob\n"];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choice(&names, &mut rng).unwrap(), "Bob");
    }

    #[test]
    fn test_single_name_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            choice(&["Bob", " ", ""], &mut rng),
            Err(CoreError::InsufficientInput { found: 1 })
        ));
    }

    #[test]
    fn test_no_names_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let names: [&str; 0] = [];
        assert!(matches!(
            choice(&names, &mut rng),
            Err(CoreError::InsufficientInput { found: 0 })
        ));
    }

    #[test]
    fn test_owned_strings_accepted() {
        let names = parse_names("a, b, c");
        let mut rng = StdRng::seed_from_u64(5);
        let chosen = choice(&names, &mut rng).unwrap();
        assert!(names.contains(&chosen));
    }
}
