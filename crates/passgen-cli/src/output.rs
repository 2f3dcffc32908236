//! Plain and JSON output for generated passphrases.

use passgen_core::Passphrase;
use serde::Serialize;
use zeroize::Zeroizing;

/// JSON shape of one passphrase. Borrows the text so no owned copy exists
/// outside the output buffer.
#[derive(Serialize)]
struct PassphraseJson<'a> {
    passphrase: &'a str,
    length: usize,
    words: usize,
}

impl<'a> From<&'a Passphrase> for PassphraseJson<'a> {
    fn from(passphrase: &'a Passphrase) -> Self {
        Self {
            passphrase: passphrase.as_str(),
            length: passphrase.len(),
            words: passphrase.words(),
        }
    }
}

/// Render passphrases one per line, or as a JSON array.
///
/// The rendered text holds the secrets and is wiped on drop. Buffers are
/// sized up front so growth does not leave stale copies behind.
pub fn render(passphrases: &[Passphrase], json: bool) -> anyhow::Result<Zeroizing<String>> {
    if json {
        let items: Vec<PassphraseJson<'_>> =
            passphrases.iter().map(PassphraseJson::from).collect();
        // Quotes and backslashes at most double; the rest is field names and layout.
        let capacity = passphrases
            .iter()
            .map(|p| p.as_str().len() * 2 + 96)
            .sum::<usize>()
            + 4;
        let mut buf = Zeroizing::new(Vec::with_capacity(capacity));
        serde_json::to_writer_pretty(&mut *buf, &items)?;
        let text = String::from_utf8(std::mem::take(&mut *buf))?;
        return Ok(Zeroizing::new(text));
    }

    let capacity = passphrases.iter().map(|p| p.as_str().len() + 1).sum();
    let mut text = Zeroizing::new(String::with_capacity(capacity));
    for passphrase in passphrases {
        text.push_str(passphrase.as_str());
        text.push('\n');
    }
    text.pop();
    Ok(text)
}
