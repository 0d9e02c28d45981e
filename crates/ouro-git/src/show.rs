/// Decode `git show --pretty=raw` output into a raw commit body.
///
/// The raw format wraps the commit body: a leading `commit <sha>` line, the
/// header fields verbatim, the message indented by four spaces, and then
/// (when the commit touches files) a diff. Decoding drops the `commit `
/// line, strips the message indent, and stops at the `diff ` line after
/// trimming the blank separator line before it.
pub fn decode_show_raw(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for line in raw.split(|&b| b == b'\n') {
        if line.starts_with(b"commit ") {
            continue;
        }
        if line.starts_with(b"diff ") {
            // Drop the blank line separating message from diff.
            out.pop();
            break;
        }
        let line = line.strip_prefix(b"    ".as_slice()).unwrap_or(line);
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &[u8] = b"commit 9b2f01d3c44dc0b3be14b3a42e53e357822e1e32\n\
        tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
        parent 83c2a5c7a90f61e08f07b87ffbbae44ca8e3073c\n\
        author A U Thor <a@example.com> 1700000000 +0000\n\
        committer A U Thor <a@example.com> 1700000000 +0000\n\
        \n\
        \x20   subject line\n\
        \n\
        \x20   body line\n";

    #[test]
    fn drops_commit_line_and_unindents_message() {
        let body = decode_show_raw(RAW);
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n"));
        assert!(text.contains("\n\nsubject line\n"));
        assert!(text.contains("\nbody line\n"));
        assert!(!text.contains("commit 9b2f01d3"));
        assert!(!text.contains("    subject"));
    }

    #[test]
    fn stops_at_diff_and_trims_separator() {
        let mut raw = RAW.to_vec();
        raw.extend_from_slice(b"\ndiff --git a/f b/f\nindex 000..111\n");
        let body = decode_show_raw(&raw);
        let text = String::from_utf8(body).unwrap();
        assert!(!text.contains("diff --git"));
        assert!(!text.contains("index 000"));
        assert!(text.ends_with("body line\n"));
    }

    #[test]
    fn preserves_blank_line_between_header_and_message() {
        let body = decode_show_raw(RAW);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("+0000\n\nsubject line"));
    }
}
