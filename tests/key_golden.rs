
use fixture::ScriptedTerminal;
use twopane::{KeyReader, PaneAction};

#[test]
fn key_actions_match_fixture() {
    let raw = fixture::read_fixture("key_actions.tsv");
    for (idx, line) in raw.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        assert!(
            parts.len() == 2,
            "line {line_num}: expected 2 columns, got {}",
            parts.len()
        );
        let key = fixture::unescape(parts[0]);
        let expected = match parts[1].trim() {
            "down" => PaneAction::CursorDown,
            "up" => PaneAction::CursorUp,
            "quit" => PaneAction::Quit,
            "unbound" => PaneAction::Unbound,
            other => panic!("line {line_num}: invalid expected action {other}"),
        };
        assert_eq!(
            PaneAction::for_key(&key),
            expected,
            "line {line_num}: action for {key:?} mismatch"
        );
    }
}

#[test]
fn fixture_keys_read_back_as_single_tokens() {
    // Each fixture key arrives as one burst and must come back as exactly one token.
    let raw = fixture::read_fixture("key_actions.tsv");
    let keys: Vec<String> = raw
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split('\t').next())
        .map(fixture::unescape)
        .collect();
    let bursts: Vec<&str> = keys.iter().map(String::as_str).collect();

    let mut term = ScriptedTerminal::new((80, 24), &bursts);
    let mut reader = KeyReader::new();
    for key in &keys {
        let token = reader.read_key(&mut term).expect("read key");
        if key.starts_with('\x1b') {
            assert_eq!(&token, key);
        } else {
            // Non-escape bursts return their first code point only.
            assert_eq!(token.chars().count(), 1);
            assert!(key.starts_with(&token));
        }
    }
}

#[test]
fn escape_then_idle_is_a_bare_escape() {
    let mut term = ScriptedTerminal::new((80, 24), &["\x1b", "[B"]);
    let mut reader = KeyReader::new();
    assert_eq!(reader.read_key(&mut term).unwrap(), "\x1b");
    assert_eq!(reader.read_key(&mut term).unwrap(), "[");
    assert_eq!(reader.read_key(&mut term).unwrap(), "B");
}

#[test]
fn buffered_escape_bytes_form_a_down_arrow() {
    let mut term = ScriptedTerminal::new((80, 24), &["\x1b[B", "k"]);
    let stats = term.stats();
    let mut reader = KeyReader::new();
    assert_eq!(reader.read_key(&mut term).unwrap(), "\x1b[B");
    assert_eq!(stats.borrow().reads, 3);
    assert_eq!(stats.borrow().raw_entries, 1);
    assert_eq!(stats.borrow().restores, 1);
    assert_eq!(reader.read_key(&mut term).unwrap(), "k");
}

#[test]
fn pushed_back_key_skips_terminal_io() {
    let mut term = ScriptedTerminal::new((80, 24), &["j"]);
    let stats = term.stats();
    let mut reader = KeyReader::new();

    reader.unread_key("x");
    assert_eq!(reader.read_key(&mut term).unwrap(), "x");
    assert_eq!(stats.borrow().reads, 0);
    assert_eq!(stats.borrow().raw_entries, 0);

    assert_eq!(reader.read_key(&mut term).unwrap(), "j");
    assert_eq!(stats.borrow().reads, 1);
    assert!(!stats.borrow().raw);
}
