// UI layer: the interactive confirmation shown before uploads, using
// `dialoguer`. Scripted runs bypass it with --yes.

use dialoguer::Input;

/// Ask the operator to confirm an upload against `url`. Returns `true`
/// only for the exact answer `y`; any other input declines, as does a
/// prompt that cannot be read (no attached terminal). `assume_yes` (the
/// `--yes` flag) skips the prompt entirely.
pub fn confirm_upload(kind: &str, url: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    let prompt = format!("{} will be uploaded to {}. Continue? [y/n]", kind, url);
    match Input::<String>::new().with_prompt(prompt).interact_text() {
        Ok(answer) => is_accept(&answer),
        Err(_) => false,
    }
}

/// Only the exact token `y` accepts.
fn is_accept(answer: &str) -> bool {
    answer == "y"
}

#[cfg(test)]
mod tests {
    use super::is_accept;

    #[test]
    fn only_the_exact_token_accepts() {
        assert!(is_accept("y"));
        assert!(!is_accept("Y"));
        assert!(!is_accept("yes"));
        assert!(!is_accept(" y"));
        assert!(!is_accept(""));
        assert!(!is_accept("n"));
    }
}
