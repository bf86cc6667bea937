//! Browse a directory: entries on top, a preview of the selected entry below.
//!
//! Run with `cargo run --example files -- [DIR]`. `j`/`k` or the arrows move, Enter picks
//! the entry and prints its path, `?` shows help, `q` or ESC quits.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use twopane::{Row, TwoPane};

const PREVIEW_LINES: usize = 200;

struct Entry {
    path: PathBuf,
    is_dir: bool,
}

impl Entry {
    fn preview(&self) -> Vec<String> {
        if self.is_dir {
            return match list_dir(&self.path) {
                Ok(entries) => entries.iter().map(|entry| entry.title().into_owned()).collect(),
                Err(err) => vec![format!("cannot list directory: {err}")],
            };
        }
        match fs::read(&self.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes)
                .lines()
                .take(PREVIEW_LINES)
                .map(|line| line.replace('\t', "    "))
                .collect(),
            Err(err) => vec![format!("cannot read file: {err}")],
        }
    }
}

impl Row for Entry {
    fn title(&self) -> Cow<'_, str> {
        let name = self
            .path
            .file_name()
            .map_or_else(|| self.path.to_string_lossy(), |name| name.to_string_lossy());
        if self.is_dir {
            Cow::Owned(format!("\x1b[34m{name}/\x1b[0m"))
        } else {
            name
        }
    }

    fn contents(&self) -> Cow<'_, [String]> {
        Cow::Owned(self.preview())
    }
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_dir = entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false);
        entries.push(Entry {
            path: entry.path(),
            is_dir,
        });
    }
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.path.cmp(&b.path)));
    Ok(entries)
}

fn main() {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let entries = match list_dir(Path::new(&dir)) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("files: {dir}: {err}");
            std::process::exit(1);
        }
    };

    let picked: Rc<RefCell<Option<PathBuf>>> = Rc::new(RefCell::new(None));
    let picked_ref = Rc::clone(&picked);
    let mut pane = TwoPane::new(entries).with_handler(move |param| match param.key() {
        "\r" | "\n" => {
            *picked_ref.borrow_mut() = Some(param.current().path.clone());
            false
        }
        "?" => {
            param.message("j/k move, enter picks, q quits (any key to continue)");
            // Whatever was pressed still counts as a key for the list.
            if let Ok(key) = param.get_key() {
                param.unget_key(key);
            }
            true
        }
        _ => true,
    });

    if let Err(err) = pane.run() {
        eprintln!("files: {err}");
        std::process::exit(1);
    }
    if let Some(path) = picked.borrow().as_ref() {
        println!("{}", path.display());
    };
}
