use std::path::Path;

/// Build the stored file name for an upload: `<token><.ext>`.
///
/// `token` is a millisecond timestamp. The extension is taken from
/// `original_filename` including its leading dot, or dropped when the name has
/// none (dotfiles such as `.profile` count as having none). Extensions with
/// anything other than ASCII letters and digits are dropped as well, so the
/// name is always safe to serve and to put in a URL path.
pub fn blob_name(token: i64, original_filename: &str) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| e.bytes().all(|b| b.is_ascii_alphanumeric()))
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{token}{ext}")
}
